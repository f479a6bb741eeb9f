use anyhow::Result;
use clap::Parser;
use secret_cli::cmd::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cmd::run(
        &cli,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )
}
