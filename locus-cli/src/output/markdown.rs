//! Markdown output formatter

use super::{detail_label, status_label, OutputFormatter};
use anyhow::Result;
use locus_api::BatchOutput;
use std::io::Write;
use std::path::Path;

/// Markdown formatter - one table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    rule_count: usize,
    located_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rule_count: 0,
            located_count: 0,
        }
    }
}

/// Keep cell text from breaking the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, document: &Path, output: &BatchOutput) -> Result<()> {
        writeln!(self.writer, "## {}", document.display())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rule | Status | Tier | Selection |")?;
        writeln!(self.writer, "|------|--------|------|-----------|")?;

        for report in &output.reports {
            let selection = report
                .selection
                .as_ref()
                .and_then(|s| s.text.as_deref())
                .map(escape_cell)
                .unwrap_or_default();
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                escape_cell(&report.rule_id),
                status_label(report),
                detail_label(report),
                selection
            )?;
        }
        writeln!(self.writer)?;

        self.rule_count += output.summary.total;
        self.located_count += output.summary.located + output.summary.degraded;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Located {} of {} rules*",
            self.located_count, self.rule_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_output;

    #[test]
    fn test_markdown_table() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter
            .format_document(Path::new("a.txt"), &sample_output())
            .unwrap();
        formatter.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("## a.txt\n\n| Rule | Status | Tier | Selection |\n"));
        assert!(text.contains("| cap | located | normalized_in_region > highlight_exact | capped |"));
        assert!(text.contains("| law | not found | not found |  |"));
        assert!(text.ends_with("---\n*Located 1 of 2 rules*\n"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b\nc"), "a\\|b c");
    }
}
