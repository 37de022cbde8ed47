//! Engine error types
//!
//! Only configuration problems are errors. Search misses and host failures
//! during a locate are outcomes, reported through
//! [`LocateOutcome`](crate::LocateOutcome).

use locus_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Domain validation error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A tier plan has no tiers
    #[error("the {plan} plan has no tiers")]
    EmptyPlan {
        /// Which plan was empty
        plan: &'static str,
    },

    /// A highlight plan contains a tier that searches outside the sentence
    #[error("highlight tier {tier} searches across regions; highlight search must stay inside the sentence")]
    UnscopedHighlightTier {
        /// Name of the offending tier
        tier: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
