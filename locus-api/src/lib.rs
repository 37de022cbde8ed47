//! Public API for locus
//!
//! This crate wraps the locator in a stable interface for rule records: a
//! playbook of stored rules is located one by one against a document, and
//! each rule gets a serializable report.
//!
//! ```
//! use locus_api::{RuleLocator, RuleRecord};
//!
//! let rules = vec![
//!     RuleRecord::new("cap", "Liability is capped at fees paid.").with_selection("capped"),
//!     RuleRecord::new("term", "The term is ten years."),
//! ];
//! let output = RuleLocator::new()
//!     .unwrap()
//!     .locate_text("Liability is capped at fees paid.\nThe term is one year.", &rules);
//!
//! assert_eq!(output.summary.located, 1);
//! assert_eq!(output.summary.not_found, 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use futures::executor::block_on;
use locus_core::{MemoryDocument, RangeText};
use locus_engine::Locator;
use log::{debug, info};
use std::path::Path;

// Re-export key types
pub use config::{Config, ConfigBuilder, DocumentSection, LocatorSection};
pub use dto::{BatchOutput, BatchSummary, LocateReport, RuleRecord, RuleSet, SelectionInfo};
pub use error::{ApiError, Result};
pub use locus_engine::{HighlightStatus, MissReason, TierKind};

/// Locates rule records in a document
///
/// Rules are located one after another against the same host; each is an
/// independent locate, so the host ends up with the last located rule
/// selected.
#[derive(Debug, Clone)]
pub struct RuleLocator {
    locator: Locator,
    config: Config,
}

impl RuleLocator {
    /// Create a rule locator with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a rule locator with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let locator = Locator::with_config(config.to_engine_config()?)?;
        Ok(Self { locator, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locate one rule and select it in `host`
    pub async fn locate_rule<H>(&self, host: &H, rule: &RuleRecord) -> LocateReport
    where
        H: RangeText + ?Sized,
    {
        let outcome = self.locator.locate(host, &rule.to_query()).await;
        debug!("rule {}: {:?}", rule.id, outcome);
        LocateReport::from_outcome(rule, &outcome, host)
    }

    /// Locate every rule in order
    pub async fn locate_all<H>(&self, host: &H, rules: &[RuleRecord]) -> BatchOutput
    where
        H: RangeText + ?Sized,
    {
        let mut reports = Vec::with_capacity(rules.len());
        for rule in rules {
            reports.push(self.locate_rule(host, rule).await);
        }
        let output = BatchOutput::from(reports);
        info!(
            "{} rule(s): {} located, {} degraded, {} not found",
            output.summary.total,
            output.summary.located,
            output.summary.degraded,
            output.summary.not_found
        );
        output
    }

    /// Locate rules in plain text, one paragraph per line
    pub fn locate_text(&self, text: &str, rules: &[RuleRecord]) -> BatchOutput {
        let doc = self.document(text);
        block_on(self.locate_all(&doc, rules))
    }

    /// Locate rules in a UTF-8 text file
    pub fn locate_file<P: AsRef<Path>>(&self, path: P, rules: &[RuleRecord]) -> Result<BatchOutput> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(self.locate_text(&text, rules))
    }

    /// In-memory document configured from `[document]`, without a call log
    pub fn document(&self, text: &str) -> MemoryDocument {
        MemoryDocument::from_text(text)
            .with_max_query_len(self.config.document.max_query_len)
            .without_call_log()
    }
}

// Convenience functions

/// Locate rules in text with the default configuration
pub fn locate_text(text: &str, rules: &[RuleRecord]) -> Result<BatchOutput> {
    Ok(RuleLocator::new()?.locate_text(text, rules))
}

/// Locate rules in a file with the default configuration
pub fn locate_file<P: AsRef<Path>>(path: P, rules: &[RuleRecord]) -> Result<BatchOutput> {
    RuleLocator::new()?.locate_file(path, rules)
}
