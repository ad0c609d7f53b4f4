//! Command-line surface.
//!
//! Options come first, then the format message and its parameters; anything
//! after the first positional is taken literally so format parameters may
//! start with `-`. Unknown color names are dropped silently.

use std::ffi::OsString;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::render::Stream;
use crate::style::{Color, StyleOption, StyleSet};

#[derive(Parser, Debug)]
#[command(
    name = "cprintf",
    about = "Print formatted, optionally colored text to stdout or stderr",
    disable_version_flag = true
)]
pub struct Cli {
    /// Show version and active color engine, then exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Set font color (any of: black, blue, green, cyan, red, magenta, yellow, white)
    #[arg(short = 'c', long = "color", value_name = "color")]
    pub color: Vec<String>,

    /// Set background color (any of: black, blue, green, cyan, red, magenta, yellow, white)
    #[arg(
        short = 'b',
        long = "background-color",
        value_name = "background color"
    )]
    pub background_color: Vec<String>,

    /// Set font weight to bold
    #[arg(short = 'B', long = "bold", action = ArgAction::Count)]
    pub bold: u8,

    /// Set output mode (any of: auto, term, win32_console, none, html)
    #[arg(short = 'm', long = "mode", value_name = "output mode")]
    pub mode: Option<String>,

    /// Set output stream
    #[arg(
        short = 's',
        long = "output-stream",
        value_name = "ostream",
        value_enum,
        default_value_t = Stream::Stdout
    )]
    pub output_stream: Stream,

    /// Enable interpretation of backslash escapes (like the unix echo command)
    #[arg(short = 'e', action = ArgAction::SetTrue, overrides_with = "no_escapes")]
    pub escapes: bool,

    /// Disable interpretation of backslash escapes (default)
    #[arg(short = 'E', action = ArgAction::SetTrue, overrides_with = "escapes")]
    pub no_escapes: bool,

    /// Set the theme used for HTML color names
    #[arg(short = 't', long = "theme", value_name = "name")]
    pub theme: Option<String>,

    /// Generate shell completions and exit
    #[arg(long = "completions", value_name = "shell", value_enum, hide = true)]
    pub completions: Option<Shell>,

    /// Format message followed by its positional parameters
    #[arg(
        value_name = "format message",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub text: Vec<OsString>,
}

impl Cli {
    /// Whether `-e` is in effect (the later of `-e`/`-E` wins).
    pub fn interpret_escapes(&self) -> bool {
        self.escapes && !self.no_escapes
    }

    /// Collect the requested style options in command-line order:
    /// foreground colors, then background colors, then bold.
    ///
    /// Names that do not match a known color contribute nothing.
    pub fn style_set(&self) -> StyleSet {
        let mut set = StyleSet::new();
        for name in &self.color {
            if let Some(color) = Color::from_name(name) {
                set.push(StyleOption::Fg(color));
            }
        }
        for name in &self.background_color {
            if let Some(color) = Color::from_name(name) {
                set.push(StyleOption::Bg(color));
            }
        }
        for _ in 0..self.bold {
            set.push(StyleOption::Bold);
        }
        set
    }
}
