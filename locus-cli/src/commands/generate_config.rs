//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Commented configuration template; every value is the default
pub const CONFIG_TEMPLATE: &str = r#"# locus configuration

[locator]
# Fall back to punctuation-insensitive search when exact and normalized
# search both miss. Disable to avoid loose matches.
ignore_punctuation = true

# Allow the sentence to continue across paragraph breaks.
cross_region = true

# Cap on query length in characters. Longer sentences are only searched by
# the punctuation-insensitive tier, using their prefix. The document's own
# limit always wins when it is lower.
# query_ceiling = 255

[document]
# Longest query the in-memory document accepts.
max_query_len = 255
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   locus validate -c {}", self.output.display());
        println!("3. Use it for locating:");
        println!(
            "   locus locate -d contract.txt -r rules.json -c {}",
            self.output.display()
        );

        Ok(())
    }
}
