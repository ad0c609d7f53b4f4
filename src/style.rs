//! Style options recognized by the render back ends.
//!
//! Eight foreground colors, eight background colors, and bold. Lookup by
//! name is lenient: an unknown color name yields `None` and the caller
//! drops it silently, matching the tool's forgiving CLI parsing.

/// One of the eight colors every back end understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

/// Name table for `-c`/`-b` lookups.
const COLOR_NAMES: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("blue", Color::Blue),
    ("green", Color::Green),
    ("cyan", Color::Cyan),
    ("red", Color::Red),
    ("magenta", Color::Magenta),
    ("yellow", Color::Yellow),
    ("white", Color::White),
];

impl Color {
    /// Look up a color by name, case-insensitively.
    ///
    /// Unknown names return `None`; callers are expected to ignore them
    /// rather than fail.
    pub fn from_name(name: &str) -> Option<Color> {
        let lowered = name.to_ascii_lowercase();
        COLOR_NAMES
            .iter()
            .find(|(n, _)| *n == lowered)
            .map(|(_, c)| *c)
    }

    /// Capitalized name as used in CSS color values (`Blue`, `Magenta`, ...).
    pub(crate) fn css_name(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }
}

/// One visual attribute requested for an output call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOption {
    /// Foreground color.
    Fg(Color),
    /// Background color.
    Bg(Color),
    /// Bold font weight.
    Bold,
}

/// The ordered set of style options for one output call.
///
/// Duplicates and conflicting colors are allowed; each back end resolves
/// them deterministically (escape-code back ends emit every option in
/// order, the console back end folds with last-color-wins).
pub type StyleSet = Vec<StyleOption>;
