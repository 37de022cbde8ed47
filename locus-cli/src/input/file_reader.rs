//! File reading utilities

use anyhow::{Context, Result};
use locus_api::RuleSet;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a document as UTF-8 text
    ///
    /// A leading byte-order mark is dropped so it cannot end up in the first
    /// paragraph.
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(match content.strip_prefix('\u{FEFF}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        })
    }

    /// Load a `.json` or `.toml` rules file
    pub fn read_rules(path: &Path) -> Result<RuleSet> {
        RuleSet::from_file(path)
            .with_context(|| format!("Failed to load rules: {}", path.display()))
    }
}
