//! End-to-end tests driving the compiled cprintf binary.
//!
//! Every invocation scrubs the mode/theme environment variables so the
//! ambient shell cannot change which back end is selected.

use assert_cmd::Command;
use predicates::prelude::*;

/// Binary with a scrubbed environment.
fn cprintf() -> Command {
    let mut cmd = Command::cargo_bin("cprintf").expect("binary builds");
    cmd.env_remove("CPRINTF_MODE")
        .env_remove("CPRINTF_THEME")
        .env_remove("ANSI_COLORS_DISABLED")
        .env_remove("OSTYPE");
    cmd
}

// ============================================================================
// Plain output and substitution
// ============================================================================

#[test]
fn emits_template_verbatim_without_arguments() {
    cprintf()
        .args(["-m", "none", "hello {0}"])
        .assert()
        .success()
        .stdout("hello {0}");
}

#[test]
fn substitutes_positional_arguments() {
    cprintf()
        .args(["-m", "none", "hello {0}", "world"])
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn substitutes_multiple_arguments_in_any_order() {
    cprintf()
        .args(["-m", "none", "{1}-{0}", "a", "b"])
        .assert()
        .success()
        .stdout("b-a");
}

#[test]
fn no_message_prints_nothing() {
    cprintf().args(["-m", "none"]).assert().success().stdout("");
}

#[test]
fn missing_argument_fails_with_nonzero_exit() {
    cprintf()
        .args(["-m", "none", "hello {1}", "world"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("placeholder"));
}

// ============================================================================
// Terminal back end
// ============================================================================

#[test]
fn term_wraps_text_in_sgr_codes() {
    cprintf()
        .args(["-m", "term", "-c", "red", "x"])
        .assert()
        .success()
        .stdout("\x1b[31mx\x1b[0m");
}

#[test]
fn term_joins_codes_in_option_order() {
    cprintf()
        .args(["-m", "term", "-c", "red", "-b", "blue", "-B", "x"])
        .assert()
        .success()
        .stdout("\x1b[31;44;1mx\x1b[0m");
}

#[test]
fn term_empty_style_set_writes_plain_text() {
    cprintf()
        .args(["-m", "term", "plain"])
        .assert()
        .success()
        .stdout("plain");
}

#[test]
fn unknown_color_name_is_silently_dropped() {
    cprintf()
        .args(["-m", "term", "-c", "purple", "x"])
        .assert()
        .success()
        .stdout("x");
}

// ============================================================================
// HTML back end
// ============================================================================

#[test]
fn html_escapes_even_without_styles() {
    cprintf()
        .args(["-m", "html", "<b>"])
        .assert()
        .success()
        .stdout("&lt;b&gt;");
}

#[test]
fn html_wraps_styled_text_in_span() {
    cprintf()
        .args(["-m", "html", "-c", "red", "x"])
        .assert()
        .success()
        .stdout(r#"<span style="color: Red;">x</span>"#);
}

#[test]
fn html_theme_prefixes_color_names() {
    cprintf()
        .args(["-m", "html", "-t", "dark", "-b", "blue", "<b>"])
        .assert()
        .success()
        .stdout(r#"<span style="background-color: darkBlue;">&lt;b&gt;</span>"#);
}

#[test]
fn html_theme_comes_from_environment_when_flag_absent() {
    cprintf()
        .env("CPRINTF_THEME", "dark")
        .args(["-m", "html", "-b", "blue", "x"])
        .assert()
        .success()
        .stdout(r#"<span style="background-color: darkBlue;">x</span>"#);
}

// ============================================================================
// Mode selection
// ============================================================================

#[test]
fn none_mode_ignores_style_options() {
    cprintf()
        .args(["-m", "none", "-c", "red", "-B", "x"])
        .assert()
        .success()
        .stdout("x");
}

#[test]
fn unrecognized_mode_falls_back_to_none() {
    cprintf()
        .args(["-m", "bogus", "-c", "red", "x"])
        .assert()
        .success()
        .stdout("x");
}

#[test]
fn mode_environment_variable_overrides_auto() {
    cprintf()
        .env("CPRINTF_MODE", "none")
        .args(["-c", "red", "x"])
        .assert()
        .success()
        .stdout("x");
}

#[test]
fn explicit_mode_beats_environment_override() {
    cprintf()
        .env("CPRINTF_MODE", "none")
        .args(["-m", "term", "-c", "red", "x"])
        .assert()
        .success()
        .stdout("\x1b[31mx\x1b[0m");
}

#[cfg(unix)]
#[test]
fn auto_selects_term_on_posix() {
    cprintf()
        .args(["-c", "red", "x"])
        .assert()
        .success()
        .stdout("\x1b[31mx\x1b[0m");
}

#[cfg(unix)]
#[test]
fn ansi_colors_disabled_selects_none() {
    cprintf()
        .env("ANSI_COLORS_DISABLED", "1")
        .args(["-c", "red", "x"])
        .assert()
        .success()
        .stdout("x");
}

#[cfg(unix)]
#[test]
fn win32_console_mode_is_a_fatal_error_off_windows() {
    cprintf()
        .args(["-m", "win32_console", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("win32_console"));
}

// ============================================================================
// Streams
// ============================================================================

#[test]
fn output_goes_to_stderr_on_request() {
    cprintf()
        .args(["-m", "none", "-s", "stderr", "to stderr"])
        .assert()
        .success()
        .stdout("")
        .stderr("to stderr");
}

// ============================================================================
// Backslash escapes
// ============================================================================

#[test]
fn escapes_are_literal_by_default() {
    cprintf()
        .args(["-m", "none", r"a\tb"])
        .assert()
        .success()
        .stdout(r"a\tb");
}

#[test]
fn dash_e_interprets_escapes() {
    cprintf()
        .args(["-m", "none", "-e", r"a\tb\n"])
        .assert()
        .success()
        .stdout("a\tb\n");
}

#[test]
fn dash_capital_e_disables_interpretation_again() {
    cprintf()
        .args(["-m", "none", "-e", "-E", r"a\tb"])
        .assert()
        .success()
        .stdout(r"a\tb");
}

#[test]
fn escapes_apply_to_parameters_too() {
    cprintf()
        .args(["-m", "none", "-e", "{0}", r"x\ty"])
        .assert()
        .success()
        .stdout("x\ty");
}

// ============================================================================
// Version
// ============================================================================

#[test]
fn version_prints_engine_name_and_exits_zero() {
    cprintf()
        .args(["-m", "term", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("Color Engine: terminal"));
}

#[test]
fn version_reflects_forced_mode() {
    cprintf()
        .args(["-m", "html", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color Engine: html css"));
}

#[test]
fn version_renders_nothing_else() {
    cprintf()
        .args(["-m", "term", "-c", "red", "-v", "ignored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}
