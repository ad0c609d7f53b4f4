//! HTML/CSS back end for build logs viewed in a browser.
//!
//! Each style option becomes a CSS declaration inside a `<span style="...">`
//! wrapper; the text itself is HTML-entity-escaped. With an empty style set
//! the escaped text is emitted without a wrapper.
//!
//! When a theme is set, color names are prefixed with it: theme `dark` plus
//! blue yields `darkBlue`. This is the documented theme substitution; any
//! token that forms a valid CSS color name when concatenated this way works.

use super::Engine;
use crate::style::{StyleOption, StyleSet};

/// Back end emitting HTML `<span>` elements with inline styles.
pub struct HtmlEngine {
    theme: Option<String>,
}

impl HtmlEngine {
    pub fn new(theme: Option<String>) -> HtmlEngine {
        HtmlEngine { theme }
    }

    fn css_fragment(&self, option: &StyleOption) -> String {
        match option {
            StyleOption::Fg(c) => format!("color: {};", self.color_name(c.css_name())),
            StyleOption::Bg(c) => {
                format!("background-color: {};", self.color_name(c.css_name()))
            }
            StyleOption::Bold => "font-weight: bold;".to_string(),
        }
    }

    fn color_name(&self, base: &str) -> String {
        match &self.theme {
            Some(theme) => format!("{theme}{base}"),
            None => base.to_string(),
        }
    }
}

/// Escape the characters with meaning in HTML text content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl Engine for HtmlEngine {
    fn name(&self) -> &'static str {
        "html css"
    }

    fn render(&self, set: &StyleSet, text: &str) -> String {
        if set.is_empty() {
            return escape_html(text);
        }
        let fragments: Vec<String> = set.iter().map(|o| self.css_fragment(o)).collect();
        format!(
            r#"<span style="{}">{}</span>"#,
            fragments.join(" "),
            escape_html(text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn empty_set_still_escapes() {
        assert_eq!(HtmlEngine::new(None).render(&vec![], "<b>"), "&lt;b&gt;");
    }

    #[test]
    fn escape_handles_amp_first() {
        assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn foreground_becomes_color_declaration() {
        let set = vec![StyleOption::Fg(Color::Red)];
        assert_eq!(
            HtmlEngine::new(None).render(&set, "x"),
            r#"<span style="color: Red;">x</span>"#
        );
    }

    #[test]
    fn fragments_are_space_joined() {
        let set = vec![StyleOption::Fg(Color::Red), StyleOption::Bold];
        assert_eq!(
            HtmlEngine::new(None).render(&set, "x"),
            r#"<span style="color: Red; font-weight: bold;">x</span>"#
        );
    }

    #[test]
    fn theme_prefixes_color_names() {
        let engine = HtmlEngine::new(Some("dark".to_string()));
        let set = vec![StyleOption::Bg(Color::Blue)];
        assert_eq!(
            engine.render(&set, "<b>"),
            r#"<span style="background-color: darkBlue;">&lt;b&gt;</span>"#
        );
    }

    #[test]
    fn theme_does_not_touch_bold() {
        let engine = HtmlEngine::new(Some("dark".to_string()));
        let set = vec![StyleOption::Bold];
        assert_eq!(
            engine.render(&set, "x"),
            r#"<span style="font-weight: bold;">x</span>"#
        );
    }
}
