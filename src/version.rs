//! Version string assembly for `--version` output.
//!
//! Dev builds carry the git SHA and build date emitted by the build
//! script; official builds (the `release` feature) get the clean crate
//! version plus build date.

/// Git SHA emitted by the build script; absent for `release` builds.
const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Build date emitted by the build script.
const BUILD_DATE: Option<&str> = option_env!("CPRINTF_BUILD_DATE");

/// Full version string.
pub fn long_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = BUILD_DATE.unwrap_or("unknown");
    match GIT_SHA {
        Some(sha) if sha != "unknown" && !sha.is_empty() => {
            let short = &sha[..sha.len().min(7)];
            format!("{version} ({short} {date})")
        }
        _ => format!("{version} ({date})"),
    }
}
