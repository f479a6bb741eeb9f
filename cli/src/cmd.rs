use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use secret_core::reconstruct_secret;

use crate::loader::{load_share_set, parse_share_set};

/// Reconstruct secrets from threshold share files.
///
/// Each FILE is a JSON share set; `-` reads one from stdin. Only the first
/// `k` shares of each file are used, integer keys first in ascending order
/// and then any other keys in document order.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Share-set files to reconstruct
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print only the secret, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Reconstruct every file named on `cli`, reading `-` from `input`.
pub fn run(
    cli: &Cli,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<()> {
    for path in &cli.files {
        let set = if path.as_os_str() == "-" {
            let mut text = String::new();
            input
                .read_to_string(&mut text)
                .context("read stdin")?;
            parse_share_set(&text).context("parse share set from stdin")?
        } else {
            load_share_set(path)
                .with_context(|| format!("load {}", path.display()))?
        };

        let secret = reconstruct_secret(&set)
            .with_context(|| format!("reconstruct {}", path.display()))?;

        if cli.quiet {
            writeln!(out, "{secret}")?;
        } else {
            writeln!(out, "Secret for {}: {secret}", path.display())?;
        }
    }
    Ok(())
}
