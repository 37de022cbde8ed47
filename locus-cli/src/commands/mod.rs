//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use locus_engine::{Tier, TierPlan};

pub mod generate_config;
pub mod locate;
pub mod normalize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Locate playbook rules in text documents
    Locate(locate::LocateArgs),

    /// Print text after typographic normalization
    Normalize(normalize::NormalizeArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the default search tiers in the order they run
    Tiers,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Locate(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Tiers => {
                println!("Sentence tiers:");
                print_plan(&TierPlan::sentence());
                println!();
                println!("Highlight tiers (searched inside the sentence):");
                print_plan(&TierPlan::highlight());
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text      One line per rule (default)");
                println!("  json      JSON array with one object per document");
                println!("  markdown  One table per document");
            }
        }
    }
}

fn print_plan(plan: &TierPlan) {
    for (idx, tier) in plan.iter().enumerate() {
        println!("  {}. {}", idx + 1, describe_tier(tier));
    }
}

/// One-line description of a tier
pub fn describe_tier(tier: &Tier) -> String {
    format!(
        "{:<28} {:?}, {:?}, match_case={}, ignore_punct={}",
        tier.kind.name(),
        tier.span,
        tier.form,
        tier.options.match_case,
        tier.options.ignore_punct
    )
}
