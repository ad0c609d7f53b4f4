//! ANSI terminal back end.
//!
//! Maps each style option to its SGR code and wraps the text in a single
//! `ESC[<codes>m` ... `ESC[0m` pair. An empty style set writes the text
//! unmodified.

use super::Engine;
use crate::style::{Color, StyleOption, StyleSet};

/// Back end emitting ANSI SGR escape sequences.
pub struct TermEngine;

/// SGR code for one style option.
fn sgr_code(option: &StyleOption) -> &'static str {
    match option {
        StyleOption::Fg(Color::Black) => "30",
        StyleOption::Fg(Color::Red) => "31",
        StyleOption::Fg(Color::Green) => "32",
        StyleOption::Fg(Color::Yellow) => "33",
        StyleOption::Fg(Color::Blue) => "34",
        StyleOption::Fg(Color::Magenta) => "35",
        StyleOption::Fg(Color::Cyan) => "36",
        StyleOption::Fg(Color::White) => "37",
        StyleOption::Bg(Color::Black) => "40",
        StyleOption::Bg(Color::Red) => "41",
        StyleOption::Bg(Color::Green) => "42",
        StyleOption::Bg(Color::Yellow) => "43",
        StyleOption::Bg(Color::Blue) => "44",
        StyleOption::Bg(Color::Magenta) => "45",
        StyleOption::Bg(Color::Cyan) => "46",
        StyleOption::Bg(Color::White) => "47",
        StyleOption::Bold => "1",
    }
}

impl Engine for TermEngine {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn render(&self, set: &StyleSet, text: &str) -> String {
        if set.is_empty() {
            return text.to_string();
        }
        let codes: Vec<&str> = set.iter().map(sgr_code).collect();
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_identity() {
        assert_eq!(TermEngine.render(&vec![], "plain"), "plain");
    }

    #[test]
    fn single_foreground_color() {
        let set = vec![StyleOption::Fg(Color::Red)];
        assert_eq!(TermEngine.render(&set, "x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn codes_appear_in_supplied_order() {
        let set = vec![
            StyleOption::Fg(Color::Red),
            StyleOption::Bg(Color::Blue),
            StyleOption::Bold,
        ];
        assert_eq!(TermEngine.render(&set, "x"), "\x1b[31;44;1mx\x1b[0m");
    }

    #[test]
    fn duplicate_options_are_kept() {
        let set = vec![StyleOption::Fg(Color::Red), StyleOption::Fg(Color::Green)];
        assert_eq!(TermEngine.render(&set, "x"), "\x1b[31;32mx\x1b[0m");
    }

    #[test]
    fn wraps_start_and_reset() {
        let set = vec![StyleOption::Bold];
        let out = TermEngine.render(&set, "hello");
        assert!(out.starts_with("\x1b["));
        assert!(out.ends_with("\x1b[0m"));
    }
}
