//! Tiered relocation of annotated text
//!
//! This crate orchestrates the search tiers over a [`DocumentHost`]. A
//! sentence is looked up with progressively looser strategies (exact,
//! normalized, cross-region, punctuation-insensitive); once found, an
//! optional highlight is searched for inside that sentence only, and the
//! result is selected on the host.
//!
//! Tiers are plain data ([`Tier`]) collected into ordered [`TierPlan`]s, so
//! the fallback chain can be inspected and reconfigured without touching the
//! control flow.
//!
//! # Example
//!
//! ```rust
//! use locus_core::{LocationQuery, MemoryDocument};
//! use locus_engine::{HighlightStatus, Locator, TierKind};
//!
//! let doc = MemoryDocument::from_text("The Supplier's liability is capped at fees paid.");
//! let query = LocationQuery::sentence("The Supplier\u{2019}s liability is capped at fees paid.")
//!     .with_highlight("capped");
//!
//! let outcome = futures::executor::block_on(Locator::new().locate(&doc, &query));
//! assert!(outcome.is_located());
//! assert_eq!(outcome.sentence_tier(), Some(TierKind::NormalizedInRegion));
//! assert_eq!(outcome.highlight(), Some(HighlightStatus::Found(TierKind::HighlightExact)));
//! assert_eq!(doc.selected_text().as_deref(), Some("capped"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
mod executor;
pub mod locator;
pub mod outcome;
pub mod plan;
pub mod tier;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use locator::{Locator, LocatorBuilder};
pub use outcome::{HighlightStatus, LocateOutcome, MissReason};
pub use plan::TierPlan;
pub use tier::{QueryForm, Span, Tier, TierKind};

// Re-export from core for convenience
pub use locus_core::{DocumentHost, LocationQuery, SearchOptions, SearchScope};
