//! Error types for the domain layer

use thiserror::Error;

/// Errors raised while validating domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The sentence text of a query was empty
    #[error("nothing to locate: sentence text is empty")]
    EmptySentence,
}

/// Errors reported by a document host
///
/// The locator treats every variant the same way: the tier that issued the
/// call did not match. They are distinguished for diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A search call failed on the host side
    #[error("search failed: {0}")]
    Search(String),

    /// Moving the selection failed
    #[error("selection failed: {0}")]
    Select(String),

    /// The batching flush failed
    #[error("sync failed: {0}")]
    Sync(String),

    /// The query exceeded the host's length ceiling
    #[error("query of {len} characters exceeds the host limit of {max}")]
    QueryTooLong {
        /// Length of the rejected query in characters
        len: usize,
        /// Host ceiling in characters
        max: usize,
    },

    /// The combination of search options is not supported
    #[error("unsupported search options: {0}")]
    InvalidOptions(String),

    /// A wildcard query could not be compiled
    #[error("invalid wildcard query: {0}")]
    InvalidQuery(String),

    /// A range handle does not belong to this document
    #[error("range {start}..{end} is outside the document")]
    InvalidRange {
        /// Start offset of the rejected range
        start: usize,
        /// End offset of the rejected range
        end: usize,
    },

    /// The document context is gone (closed, reloaded)
    #[error("document context is no longer valid")]
    ContextInvalidated,
}

/// Result type for host calls
pub type HostResult<T> = std::result::Result<T, HostError>;
