//! cprintf binary entry point.

use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cprintf::cli::Cli;
use cprintf::{escape, mode, version, Mode, Printer};

fn main() {
    if let Err(err) = run() {
        eprintln!("cprintf: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "cprintf", &mut io::stdout());
        return Ok(());
    }

    let mode = cli
        .mode
        .as_deref()
        .map(Mode::from_name)
        .unwrap_or(Mode::Auto);
    let theme = cli
        .theme
        .clone()
        .or_else(|| mode::process_env(mode::THEME_ENV));

    let printer = Printer::new(mode, theme)?;

    if cli.version {
        println!("{}", version::long_version());
        println!("Color Engine: {}", printer.engine_name());
        return Ok(());
    }

    let mut words: Vec<String> = cli.text.iter().map(decode_arg).collect();
    if cli.interpret_escapes() {
        words = words.iter().map(|w| escape::interpret(w)).collect();
    }

    // First positional is the template, the rest are its parameters.
    // No message at all is fine: nothing to print.
    let Some((template, params)) = words.split_first() else {
        return Ok(());
    };
    printer.emit(cli.output_stream, &cli.style_set(), template, params)?;

    Ok(())
}

/// Decode one command-line argument.
///
/// Arguments that are not valid UTF-8 get a single lossy re-decode, the
/// encoding fallback for templates coming from shells with odd locales.
fn decode_arg(arg: &OsString) -> String {
    match arg.to_str() {
        Some(s) => s.to_string(),
        None => {
            tracing::debug!(?arg, "argument is not valid UTF-8, re-decoding lossily");
            arg.to_string_lossy().into_owned()
        }
    }
}
