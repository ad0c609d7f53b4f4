//! Developer tasks for the cprintf workspace.
//!
//! Currently only man page generation: `cargo run -p xtask -- man`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace maintenance tasks")]
enum Task {
    /// Generate the cprintf man page
    Man {
        /// Directory to write the man page into
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

fn generate_man(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let cmd = cprintf::cli::Cli::command();
    let man = Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf).context("rendering man page")?;

    let path = out_dir.join("cprintf.1");
    fs::write(&path, buf).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
