//! Plain text output formatter

use super::{detail_label, status_label, OutputFormatter};
use anyhow::Result;
use locus_api::BatchOutput;
use std::io::{self, Write};
use std::path::Path;

/// Plain text formatter - one line per rule, then a summary per document
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &Path, output: &BatchOutput) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        writeln!(self.writer, "{}", document.display())?;
        for report in &output.reports {
            write!(
                self.writer,
                "  {:<10} {} [{}]",
                status_label(report),
                report.rule_id,
                detail_label(report)
            )?;
            if let Some(text) = report.selection.as_ref().and_then(|s| s.text.as_deref()) {
                write!(self.writer, " {:?}", text)?;
            }
            writeln!(self.writer)?;
        }

        let summary = &output.summary;
        writeln!(
            self.writer,
            "  {} located, {} degraded, {} not found",
            summary.located, summary.degraded, summary.not_found
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
