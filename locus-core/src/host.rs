//! Capability surface required from a document host
//!
//! The locator never talks to a word processor directly. It needs four
//! things: search confined to single regions (paragraphs), search allowed to
//! span regions, moving the visible selection, and the host's batching flush.
//! Everything is asynchronous because on a real host each call is a
//! round-trip to the editing surface.

use crate::error::HostResult;
use async_trait::async_trait;
use std::fmt;

/// Search flags understood by hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Compare case-sensitively
    pub match_case: bool,
    /// Interpret the query as a wildcard pattern
    pub match_wildcards: bool,
    /// Disregard punctuation in both query and document
    pub ignore_punct: bool,
}

impl SearchOptions {
    /// Case-sensitive literal search
    pub const fn exact() -> Self {
        Self {
            match_case: true,
            match_wildcards: false,
            ignore_punct: false,
        }
    }

    /// Case-sensitive literal search that disregards punctuation
    pub const fn ignoring_punctuation() -> Self {
        Self {
            match_case: true,
            match_wildcards: false,
            ignore_punct: true,
        }
    }
}

/// Region a single-region search runs in
pub enum SearchScope<'a, R> {
    /// The whole document body; each match stays inside one region
    Body,
    /// A previously found range; matches stay inside it and inside one region
    Within(&'a R),
}

impl<R> Clone for SearchScope<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SearchScope<'_, R> {}

impl<R: fmt::Debug> fmt::Debug for SearchScope<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::Body => f.write_str("Body"),
            SearchScope::Within(range) => f.debug_tuple("Within").field(range).finish(),
        }
    }
}

/// A live, mutable document the locator can search and select in
///
/// Callers must keep queries within [`max_query_len`](Self::max_query_len)
/// characters; an over-long query is a contract violation, and hosts are free
/// to reject it.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Opaque handle to a contiguous span of document content
    type Range: Clone + fmt::Debug + Send + Sync;

    /// Longest query, in characters, this host accepts
    fn max_query_len(&self) -> usize;

    /// Search `scope` for `query`, with every match confined to one region
    ///
    /// Matches are returned in document order.
    async fn search_in_region(
        &self,
        scope: SearchScope<'_, Self::Range>,
        query: &str,
        options: SearchOptions,
    ) -> HostResult<Vec<Self::Range>>;

    /// Search the whole document for `query`, allowing matches to span regions
    async fn search_across_regions(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> HostResult<Vec<Self::Range>>;

    /// Move the user-visible selection to `range`
    async fn select(&self, range: &Self::Range) -> HostResult<()>;

    /// Flush queued operations; required between a search and reading its results
    async fn sync(&self) -> HostResult<()>;
}

/// Hosts that can render a range back to text, for reporting
pub trait RangeText: DocumentHost {
    /// Text covered by `range`
    fn range_text(&self, range: &Self::Range) -> Option<String>;

    /// Character offsets of `range` as `(start, end)`
    fn range_offsets(&self, range: &Self::Range) -> Option<(usize, usize)>;
}
