//! Domain layer for relocating annotated text inside a live document
//!
//! A playbook rule remembers the sentence it was written against and,
//! optionally, a narrower phrase inside that sentence. By the time a reviewer
//! asks to see the rule in context, the contract may have been edited: quotes
//! curled by auto-correct, a sentence split across two paragraphs, an
//! apostrophe dropped. This crate holds the pieces the search tiers are built
//! from:
//!
//! - **Normalization**: one-to-one typographic substitutions
//!   ([`normalize`](normalize::normalize)).
//! - **Host contract**: the capability surface a word processor has to offer
//!   ([`DocumentHost`]).
//! - **Queries**: what is being looked for ([`LocationQuery`]).
//! - **Reference host**: an in-memory document with the same search modes
//!   ([`MemoryDocument`]), used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use locus_core::{normalize, MemoryDocument, SearchOptions, SearchScope, DocumentHost};
//!
//! let doc = MemoryDocument::from_text("The Supplier's liability is capped.");
//! let query = normalize("The Supplier\u{2019}s liability");
//!
//! let hits = futures::executor::block_on(doc.search_in_region(
//!     SearchScope::Body,
//!     &query,
//!     SearchOptions::exact(),
//! ))
//! .unwrap();
//! assert_eq!(hits.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod host;
pub mod memory;
pub mod normalize;
pub mod query;

pub use error::{CoreError, HostError, HostResult};
pub use host::{DocumentHost, RangeText, SearchOptions, SearchScope};
pub use memory::{FaultPlan, HostCall, MemoryDocument, TextRange};
pub use normalize::{
    canonical_char, char_len, is_punctuation, needs_normalization, normalize, truncate_chars,
};
pub use query::LocationQuery;

/// Query-length ceiling of the reference host, matching common word processors
pub const DEFAULT_MAX_QUERY_LEN: usize = 255;
