//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use locus_api::{BatchOutput, BatchSummary, LocateReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Path of the document
    pub document: String,
    /// One report per rule
    pub reports: Vec<LocateReport>,
    /// Counts over `reports`
    pub summary: BatchSummary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &std::path::Path, output: &BatchOutput) -> Result<()> {
        self.documents.push(DocumentData {
            document: document.display().to_string(),
            reports: output.reports.clone(),
            summary: output.summary,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_output;
    use std::path::Path;

    #[test]
    fn test_json_document_array() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer);
        formatter
            .format_document(Path::new("a.txt"), &sample_output())
            .unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<DocumentData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].document, "a.txt");
        assert_eq!(parsed[0].reports[0].rule_id, "cap");
        assert_eq!(parsed[0].summary.not_found, 1);
    }
}
