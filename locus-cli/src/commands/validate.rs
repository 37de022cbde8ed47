//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use locus_api::Config;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let engine = Config::from_file(&self.config)
            .and_then(|config| config.to_engine_config().map(|engine| (config, engine)));

        match engine {
            Ok((config, engine)) => {
                println!("✓ Configuration is valid!");
                println!("  Sentence tiers: {}", join_kinds(&engine.sentence_plan));
                println!("  Highlight tiers: {}", join_kinds(&engine.highlight_plan));
                match config.locator.query_ceiling {
                    Some(ceiling) => println!("  Query ceiling: {ceiling}"),
                    None => println!("  Query ceiling: host maximum"),
                }
                println!("  Document max query length: {}", config.document.max_query_len);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(e).with_context(|| format!("Validation failed: {}", self.config.display()))
            }
        }
    }
}

fn join_kinds(plan: &locus_engine::TierPlan) -> String {
    plan.kinds()
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}
