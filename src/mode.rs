//! Output mode selection.
//!
//! A mode is either forced (`-m`) or resolved from the environment. The
//! auto-detection heuristic mirrors what build scripts actually encounter:
//! POSIX-emulation shells and xterm-style terminals on Windows still speak
//! ANSI, a bare Windows console wants the attribute API, and everything
//! else gets escape codes unless ANSI colors are disabled outright.
//!
//! The environment is passed in as a lookup function so selection stays a
//! pure decision that tests can drive without touching process state.

use crate::render::Backend;

/// Forces the output mode, overriding auto-detection.
pub const MODE_ENV: &str = "CPRINTF_MODE";
/// Default theme for the HTML back end.
pub const THEME_ENV: &str = "CPRINTF_THEME";
/// Presence-only switch disabling ANSI output on POSIX platforms.
pub const ANSI_DISABLED_ENV: &str = "ANSI_COLORS_DISABLED";

/// An output mode as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Auto,
    Term,
    Win32Console,
    None,
    Html,
}

impl Mode {
    /// Parse a mode name, leniently.
    ///
    /// Unrecognized names fall back to `None` so a typo degrades to
    /// unstyled output instead of failing the invocation.
    pub fn from_name(name: &str) -> Mode {
        match name.to_ascii_lowercase().as_str() {
            "" | "auto" => Mode::Auto,
            "term" => Mode::Term,
            "win32_console" => Mode::Win32Console,
            "html" => Mode::Html,
            _ => Mode::None,
        }
    }
}

/// Environment lookup used by [`select`].
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Read from the real process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Choose the active back end for a mode.
///
/// Deterministic in `mode` and `env`: calling it twice with the same
/// inputs yields the same back end.
pub fn select(mode: Mode, env: EnvLookup<'_>) -> Backend {
    let backend = match mode {
        Mode::Term => Backend::Term,
        Mode::Win32Console => Backend::Console,
        Mode::Html => Backend::Html,
        Mode::None => Backend::None,
        Mode::Auto => detect(env),
    };
    tracing::debug!(?mode, ?backend, "selected output back end");
    backend
}

fn detect(env: EnvLookup<'_>) -> Backend {
    if let Some(forced) = env(MODE_ENV) {
        let mode = Mode::from_name(&forced);
        // A forced "auto" would recurse forever; fall through to the
        // platform heuristic instead.
        if mode != Mode::Auto {
            return select(mode, env);
        }
    }

    if cfg!(windows) {
        // MSYS and Cygwin shells render ANSI escapes themselves.
        if let Some(ostype) = env("OSTYPE") {
            let ostype = ostype.to_ascii_lowercase();
            if ostype == "msys" || ostype == "cygwin" {
                return Backend::Term;
            }
        }
        // So do xterm-style terminal emulators running on Windows.
        if let Some(term) = env("TERM") {
            let term = term.to_ascii_lowercase();
            if term.starts_with("xterm") || term.starts_with("vt") {
                return Backend::Term;
            }
        }
        Backend::Console
    } else if env(ANSI_DISABLED_ENV).is_some() {
        Backend::None
    } else {
        Backend::Term
    }
}
