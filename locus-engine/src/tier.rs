//! Search tiers
//!
//! A tier is one strategy in a fallback chain: which text to search for
//! ([`QueryForm`]), whether matches may cross regions ([`Span`]), and the
//! host search flags.

use locus_core::{char_len, needs_normalization, normalize, truncate_chars, SearchOptions};
use std::borrow::Cow;
use std::fmt;

/// Name of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TierKind {
    /// Sentence, verbatim, inside one region
    ExactInRegion,
    /// Sentence, normalized, inside one region
    NormalizedInRegion,
    /// Sentence, verbatim, possibly spanning regions
    ExactAcrossRegions,
    /// Sentence, normalized, possibly spanning regions
    NormalizedAcrossRegions,
    /// Sentence prefix, punctuation disregarded
    IgnorePunctuation,
    /// Highlight prefix, verbatim, inside the sentence
    HighlightExact,
    /// Highlight prefix, normalized, inside the sentence
    HighlightNormalized,
    /// Highlight prefix, punctuation disregarded, inside the sentence
    HighlightIgnorePunctuation,
}

impl TierKind {
    /// Stable snake_case name, used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            TierKind::ExactInRegion => "exact_in_region",
            TierKind::NormalizedInRegion => "normalized_in_region",
            TierKind::ExactAcrossRegions => "exact_across_regions",
            TierKind::NormalizedAcrossRegions => "normalized_across_regions",
            TierKind::IgnorePunctuation => "ignore_punctuation",
            TierKind::HighlightExact => "highlight_exact",
            TierKind::HighlightNormalized => "highlight_normalized",
            TierKind::HighlightIgnorePunctuation => "highlight_ignore_punctuation",
        }
    }

    /// Whether this tier disregards punctuation
    pub fn ignores_punctuation(&self) -> bool {
        matches!(
            self,
            TierKind::IgnorePunctuation | TierKind::HighlightIgnorePunctuation
        )
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How far a match may extend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// Confined to a single region of the search scope
    SingleRegion,
    /// May continue across region boundaries; always searches the whole body
    AcrossRegions,
}

/// Which form of the text a tier searches for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryForm {
    /// The text as captured
    Verbatim,
    /// The text after typographic normalization
    Normalized,
    /// The text cut to the query ceiling
    Truncated,
    /// The text cut to the query ceiling, then normalized
    TruncatedNormalized,
}

impl QueryForm {
    /// Produce the query for `text`, or `None` if the tier does not apply
    ///
    /// Normalized forms do not apply when normalization changes nothing (the
    /// previous tier already searched that exact string). Non-truncating forms
    /// do not apply when the text exceeds `ceiling`, since hosts reject
    /// over-long queries.
    pub fn prepare<'a>(&self, text: &'a str, ceiling: usize) -> Option<Cow<'a, str>> {
        match self {
            QueryForm::Verbatim => (char_len(text) <= ceiling).then_some(Cow::Borrowed(text)),
            QueryForm::Normalized => {
                if char_len(text) > ceiling || !needs_normalization(text) {
                    return None;
                }
                Some(Cow::Owned(normalize(text)))
            }
            QueryForm::Truncated => Some(Cow::Borrowed(truncate_chars(text, ceiling))),
            QueryForm::TruncatedNormalized => {
                let truncated = truncate_chars(text, ceiling);
                needs_normalization(truncated).then(|| Cow::Owned(normalize(truncated)))
            }
        }
    }
}

/// One strategy in a fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tier {
    /// Name of the tier
    pub kind: TierKind,
    /// Region policy
    pub span: Span,
    /// Query form
    pub form: QueryForm,
    /// Host search flags
    pub options: SearchOptions,
}

impl Tier {
    /// Create a tier
    pub const fn new(kind: TierKind, span: Span, form: QueryForm, options: SearchOptions) -> Self {
        Self {
            kind,
            span,
            form,
            options,
        }
    }
}
