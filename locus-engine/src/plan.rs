//! Ordered tier plans

use crate::error::{EngineError, Result};
use crate::tier::{QueryForm, Span, Tier, TierKind};
use locus_core::SearchOptions;
use smallvec::SmallVec;

/// Default sentence chain, loosest last
const SENTENCE_TIERS: [Tier; 5] = [
    Tier::new(
        TierKind::ExactInRegion,
        Span::SingleRegion,
        QueryForm::Verbatim,
        SearchOptions::exact(),
    ),
    Tier::new(
        TierKind::NormalizedInRegion,
        Span::SingleRegion,
        QueryForm::Normalized,
        SearchOptions::exact(),
    ),
    Tier::new(
        TierKind::ExactAcrossRegions,
        Span::AcrossRegions,
        QueryForm::Verbatim,
        SearchOptions::exact(),
    ),
    Tier::new(
        TierKind::NormalizedAcrossRegions,
        Span::AcrossRegions,
        QueryForm::Normalized,
        SearchOptions::exact(),
    ),
    Tier::new(
        TierKind::IgnorePunctuation,
        Span::SingleRegion,
        QueryForm::Truncated,
        SearchOptions::ignoring_punctuation(),
    ),
];

/// Default highlight chain; every tier is scoped to the sentence range
const HIGHLIGHT_TIERS: [Tier; 3] = [
    Tier::new(
        TierKind::HighlightExact,
        Span::SingleRegion,
        QueryForm::Truncated,
        SearchOptions::exact(),
    ),
    Tier::new(
        TierKind::HighlightNormalized,
        Span::SingleRegion,
        QueryForm::TruncatedNormalized,
        SearchOptions::exact(),
    ),
    Tier::new(
        TierKind::HighlightIgnorePunctuation,
        Span::SingleRegion,
        QueryForm::Truncated,
        SearchOptions::ignoring_punctuation(),
    ),
];

/// An ordered fallback chain; the first tier that hits wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPlan {
    tiers: SmallVec<[Tier; 5]>,
}

impl TierPlan {
    /// Plan from explicit tiers, in order
    pub fn new(tiers: impl IntoIterator<Item = Tier>) -> Self {
        Self {
            tiers: tiers.into_iter().collect(),
        }
    }

    /// The five-tier sentence chain
    pub fn sentence() -> Self {
        Self::new(SENTENCE_TIERS)
    }

    /// The three-tier highlight chain
    pub fn highlight() -> Self {
        Self::new(HIGHLIGHT_TIERS)
    }

    /// Append a tier at the end of the chain
    pub fn push(&mut self, tier: Tier) {
        self.tiers.push(tier);
    }

    /// Same plan without tiers matching `predicate`
    pub fn without(mut self, predicate: impl Fn(&Tier) -> bool) -> Self {
        self.tiers.retain(|tier| !predicate(tier));
        self
    }

    /// Same plan without punctuation-insensitive tiers
    pub fn without_punctuation_tiers(self) -> Self {
        self.without(|tier| tier.options.ignore_punct)
    }

    /// Same plan without tiers that may cross regions
    pub fn without_cross_region_tiers(self) -> Self {
        self.without(|tier| tier.span == Span::AcrossRegions)
    }

    /// Tiers in order
    pub fn iter(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter()
    }

    /// Tier names in order
    pub fn kinds(&self) -> Vec<TierKind> {
        self.tiers.iter().map(|tier| tier.kind).collect()
    }

    /// Number of tiers
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Whether the plan has no tiers
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Check that the plan can drive sentence search
    pub fn validate_sentence(&self) -> Result<()> {
        if self.is_empty() {
            return Err(EngineError::EmptyPlan { plan: "sentence" });
        }
        Ok(())
    }

    /// Check that the plan can drive highlight search
    ///
    /// Highlight search is scoped to the sentence range; a cross-region tier
    /// would search the whole body and could select another occurrence.
    pub fn validate_highlight(&self) -> Result<()> {
        if self.is_empty() {
            return Err(EngineError::EmptyPlan { plan: "highlight" });
        }
        if let Some(tier) = self.iter().find(|tier| tier.span == Span::AcrossRegions) {
            return Err(EngineError::UnscopedHighlightTier {
                tier: tier.kind.to_string(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TierPlan {
    type Item = &'a Tier;
    type IntoIter = std::slice::Iter<'a, Tier>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}
