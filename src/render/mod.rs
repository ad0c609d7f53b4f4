//! Render back ends.
//!
//! Each back end turns a style set plus text into output for one target
//! environment: ANSI escape codes, Windows console attributes, HTML spans,
//! or nothing at all. Exactly one back end is active per [`Printer`]
//! (see [`crate::emit`]); selection lives in [`crate::mode`].

use std::io::{self, Write};

use crate::style::StyleSet;

mod html;
mod none;
mod term;

#[cfg(windows)]
mod console;

pub use html::HtmlEngine;
pub use none::NoneEngine;
pub use term::TermEngine;

#[cfg(windows)]
pub use console::ConsoleEngine;

/// Target process stream for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

impl Stream {
    /// Flush the selected stream so output is visible immediately, even
    /// when interleaved with other processes' output.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
        }
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Stream::Stdout => io::stdout().write_all(bytes),
            Stream::Stderr => io::stderr().write_all(bytes),
        }
    }
}

/// A renderer for one target environment.
///
/// `render` produces the styled text; `write` puts it on the requested
/// stream. Back ends whose styling is not representable as a string (the
/// Windows console sets attributes on the device) override `write` and
/// leave `render` as the identity.
pub trait Engine {
    /// Human-readable back end name, shown by `--version`.
    fn name(&self) -> &'static str;

    /// Wrap `text` in whatever styling realizes `set` for this back end.
    fn render(&self, set: &StyleSet, text: &str) -> String;

    /// Render and write to the selected stream.
    fn write(&self, stream: Stream, set: &StyleSet, text: &str) -> io::Result<()> {
        stream.write_all(self.render(set, text).as_bytes())
    }
}

/// Error constructing a back end.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the win32_console mode is only available on Windows")]
    ConsoleUnavailable,
}

/// Which back end to instantiate. Produced by [`crate::mode::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Term,
    Console,
    Html,
    None,
}

/// Build the engine for a selected back end.
///
/// `theme` is consumed only by the HTML back end. Requesting the console
/// back end off-Windows is a configuration error rather than a silent
/// downgrade: degrading would leave no visible hint of the mismatch.
pub fn engine_for(backend: Backend, theme: Option<String>) -> Result<Box<dyn Engine>, ConfigError> {
    match backend {
        Backend::Term => Ok(Box::new(TermEngine)),
        Backend::Html => Ok(Box::new(HtmlEngine::new(theme))),
        Backend::None => Ok(Box::new(NoneEngine)),
        #[cfg(windows)]
        Backend::Console => Ok(Box::new(ConsoleEngine)),
        #[cfg(not(windows))]
        Backend::Console => Err(ConfigError::ConsoleUnavailable),
    }
}
