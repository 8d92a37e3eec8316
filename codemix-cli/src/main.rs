//! Command-line entry point for codemix

use anyhow::Result;
use clap::Parser;
use codemix_cli::commands::Commands;

/// Token-level language identification for Hindi-English codeswitched text
#[derive(Debug, Parser)]
#[command(name = "codemix", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
