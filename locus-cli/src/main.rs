//! locus command-line entry point

use anyhow::Result;
use clap::Parser;
use locus_cli::commands::Commands;

/// Relocate playbook rules in contract text
#[derive(Debug, Parser)]
#[command(name = "locus", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
