//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::plan::TierPlan;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fallback chain for the sentence
    pub sentence_plan: TierPlan,
    /// Fallback chain for the highlight, scoped to the sentence range
    pub highlight_plan: TierPlan,
    /// Optional query-length ceiling; never raises the host's own ceiling
    pub query_ceiling: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sentence_plan: TierPlan::sentence(),
            highlight_plan: TierPlan::highlight(),
            query_ceiling: None,
        }
    }
}

impl EngineConfig {
    /// Configuration without punctuation-insensitive tiers
    ///
    /// Trades recall for a lower risk of selecting the wrong occurrence.
    pub fn strict() -> Self {
        Self {
            sentence_plan: TierPlan::sentence().without_punctuation_tiers(),
            highlight_plan: TierPlan::highlight().without_punctuation_tiers(),
            query_ceiling: None,
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Ceiling to use against a host that accepts `host_max` characters
    pub fn effective_ceiling(&self, host_max: usize) -> usize {
        let ceiling = match self.query_ceiling {
            Some(limit) => limit.min(host_max),
            None => host_max,
        };
        // A zero ceiling would turn every truncating tier into an empty query
        ceiling.max(1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.sentence_plan.validate_sentence()?;
        self.highlight_plan.validate_highlight()?;
        if self.query_ceiling == Some(0) {
            return Err(EngineError::ConfigError(
                "query_ceiling must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
