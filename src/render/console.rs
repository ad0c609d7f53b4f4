//! Windows console back end.
//!
//! Styles are realized as console attribute flags, not escape codes: the
//! current attributes are captured, the combined attribute is set, the text
//! is written, then the prior attributes are restored. The save/restore
//! pair is never interrupted by other writes on the same stream.
//!
//! Foreground black is the zero attribute (absence of color), so a style
//! set that folds to nothing writes plain text. Bold maps to background
//! intensity, which is what the combined attribute scheme has always used
//! for it.

use std::io::{self, Write};

use winapi_util::console::{Color as ConsoleColor, Console, Intense};

use super::{Engine, Stream};
use crate::style::{Color, StyleOption, StyleSet};

/// Back end driving the Windows console attribute API.
pub struct ConsoleEngine;

/// A style set folded into console attributes.
///
/// Later colors overwrite earlier ones; intensity accumulates, matching
/// the bitwise-OR scheme of the attribute flags.
#[derive(Default)]
struct Folded {
    fg: Option<(ConsoleColor, Intense)>,
    bg: Option<(ConsoleColor, Intense)>,
    bold: bool,
}

impl Folded {
    fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold
    }

    /// Background attribute, with bold folded in as intensity.
    fn background(&self) -> Option<(ConsoleColor, Intense)> {
        match (self.bg, self.bold) {
            (Some((color, _)), true) => Some((color, Intense::Yes)),
            (Some(attr), false) => Some(attr),
            // Bold alone sets the intensity bit with no background color.
            (None, true) => Some((ConsoleColor::Black, Intense::Yes)),
            (None, false) => None,
        }
    }
}

fn fold(set: &StyleSet) -> Folded {
    let mut folded = Folded::default();
    for option in set {
        match option {
            // The zero bit: contributes no color.
            StyleOption::Fg(Color::Black) => {}
            StyleOption::Fg(c) => folded.fg = Some(fg_attr(*c)),
            StyleOption::Bg(c) => folded.bg = Some((console_color(*c), Intense::No)),
            StyleOption::Bold => folded.bold = true,
        }
    }
    folded
}

/// Foreground attribute. Every color except white carries the intensity
/// bit; white is the plain 7-bit combination.
fn fg_attr(color: Color) -> (ConsoleColor, Intense) {
    let intense = match color {
        Color::White => Intense::No,
        _ => Intense::Yes,
    };
    (console_color(color), intense)
}

fn console_color(color: Color) -> ConsoleColor {
    match color {
        Color::Black => ConsoleColor::Black,
        Color::Blue => ConsoleColor::Blue,
        Color::Green => ConsoleColor::Green,
        Color::Cyan => ConsoleColor::Cyan,
        Color::Red => ConsoleColor::Red,
        Color::Magenta => ConsoleColor::Magenta,
        Color::Yellow => ConsoleColor::Yellow,
        Color::White => ConsoleColor::White,
    }
}

impl Engine for ConsoleEngine {
    fn name(&self) -> &'static str {
        "windows console"
    }

    /// Attribute changes have no string form; the text is returned as-is.
    fn render(&self, _set: &StyleSet, text: &str) -> String {
        text.to_string()
    }

    fn write(&self, stream: Stream, set: &StyleSet, text: &str) -> io::Result<()> {
        let folded = fold(set);
        if folded.is_plain() {
            return write_plain(stream, text);
        }

        // Creating the Console captures the current attributes; reset()
        // restores them after the styled write.
        let mut console = match stream {
            Stream::Stdout => Console::stdout()?,
            Stream::Stderr => Console::stderr()?,
        };

        if let Some((color, intense)) = folded.fg {
            console.fg(intense, color)?;
        }
        if let Some((color, intense)) = folded.background() {
            console.bg(intense, color)?;
        }

        let result = write_plain(stream, text);
        console.reset()?;
        result
    }
}

/// Write and flush so the styled bytes land while the attribute is active.
fn write_plain(stream: Stream, text: &str) -> io::Result<()> {
    match stream {
        Stream::Stdout => {
            let mut out = io::stdout();
            out.write_all(text.as_bytes())?;
            out.flush()
        }
        Stream::Stderr => {
            let mut err = io::stderr();
            err.write_all(text.as_bytes())?;
            err.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_foreground_folds_to_plain() {
        let folded = fold(&vec![StyleOption::Fg(Color::Black)]);
        assert!(folded.is_plain());
    }

    #[test]
    fn last_color_wins() {
        let folded = fold(&vec![
            StyleOption::Fg(Color::Red),
            StyleOption::Fg(Color::Green),
        ]);
        assert_eq!(folded.fg, Some((ConsoleColor::Green, Intense::Yes)));
    }

    #[test]
    fn white_foreground_is_not_intense() {
        let folded = fold(&vec![StyleOption::Fg(Color::White)]);
        assert_eq!(folded.fg, Some((ConsoleColor::White, Intense::No)));
    }

    #[test]
    fn bold_alone_sets_background_intensity() {
        let folded = fold(&vec![StyleOption::Bold]);
        assert!(!folded.is_plain());
        assert_eq!(folded.background(), Some((ConsoleColor::Black, Intense::Yes)));
    }

    #[test]
    fn bold_intensifies_background_color() {
        let folded = fold(&vec![StyleOption::Bg(Color::Blue), StyleOption::Bold]);
        assert_eq!(folded.background(), Some((ConsoleColor::Blue, Intense::Yes)));
    }
}
