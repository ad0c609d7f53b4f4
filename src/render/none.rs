//! Pass-through back end, the universal fallback.

use super::Engine;
use crate::style::StyleSet;

/// Back end that applies no styling at all.
pub struct NoneEngine;

impl Engine for NoneEngine {
    fn name(&self) -> &'static str {
        "none"
    }

    fn render(&self, _set: &StyleSet, text: &str) -> String {
        text.to_string()
    }
}
