//! Location queries

use crate::error::CoreError;

/// What to relocate in the document
///
/// The sentence text is the unique context captured when the rule was
/// written; it disambiguates phrases that occur more than once. The optional
/// highlight is the narrower part of the sentence that should end up
/// selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationQuery {
    /// Full sentence (or clause) captured at annotation time
    pub sentence_text: String,
    /// Sub-string of the sentence to select once the sentence is found
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlight_text: Option<String>,
}

impl LocationQuery {
    /// Query that selects the whole sentence
    pub fn sentence(text: impl Into<String>) -> Self {
        Self {
            sentence_text: text.into(),
            highlight_text: None,
        }
    }

    /// Narrow the selection to `highlight` inside the sentence
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight_text = Some(highlight.into());
        self
    }

    /// The highlight, if present and non-empty
    pub fn highlight(&self) -> Option<&str> {
        self.highlight_text.as_deref().filter(|text| !text.is_empty())
    }

    /// Reject queries that cannot be searched for
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.sentence_text.is_empty() {
            return Err(CoreError::EmptySentence);
        }
        Ok(())
    }
}
