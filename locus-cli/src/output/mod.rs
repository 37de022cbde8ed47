//! Output formatting module

use anyhow::Result;
use locus_api::{BatchOutput, LocateReport};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the reports for one document
    fn format_document(&mut self, document: &Path, output: &BatchOutput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Short status word for a report
pub fn status_label(report: &LocateReport) -> &'static str {
    if !report.located {
        "not found"
    } else if report.is_degraded() {
        "degraded"
    } else {
        "located"
    }
}

/// Tier or miss reason, for the detail column
pub fn detail_label(report: &LocateReport) -> String {
    use locus_api::HighlightStatus;

    match (report.sentence_tier, report.highlight, report.miss_reason) {
        (Some(tier), Some(HighlightStatus::Found(highlight)), _) => format!("{tier} > {highlight}"),
        (Some(tier), _, _) => tier.to_string(),
        (None, _, Some(reason)) => reason.to_string(),
        (None, _, None) => String::new(),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let output = test_support::sample_output();
        assert_eq!(status_label(&output.reports[0]), "located");
        assert_eq!(
            detail_label(&output.reports[0]),
            "normalized_in_region > highlight_exact"
        );
        assert_eq!(status_label(&output.reports[1]), "not found");
        assert_eq!(detail_label(&output.reports[1]), "not found");
    }
}
