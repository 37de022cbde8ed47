//! Normalize command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to normalize (default: read stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                buffer
            }
        };

        print!("{}", locus_core::normalize(&text));
        if self.text.is_some() {
            println!();
        }
        Ok(())
    }
}
