//! In-memory reference host
//!
//! [`MemoryDocument`] implements [`DocumentHost`] over plain text split into
//! paragraphs. It supports every search mode the locator uses, enforces its
//! own query-length ceiling the way a real word processor does, and records
//! each call so tests can observe which tiers ran. Faults can be injected to
//! exercise the locator's recovery paths.

mod matcher;
mod wildcard;

use crate::error::{HostError, HostResult};
use crate::host::{DocumentHost, RangeText, SearchOptions, SearchScope};
use crate::DEFAULT_MAX_QUERY_LEN;
use async_trait::async_trait;
use matcher::LiteralMatcher;
use parking_lot::Mutex;
use std::collections::BTreeSet;

/// Separator between paragraphs in the joined document text
pub(crate) const PARAGRAPH_BREAK: char = '\n';

/// Span of document text in character offsets, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRange {
    /// First character of the span
    pub start: usize,
    /// One past the last character of the span
    pub end: usize,
}

impl TextRange {
    /// Create a range
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range covers nothing
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `other` lies entirely inside this range
    pub fn contains(&self, other: &TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Non-empty overlap of two ranges
    pub fn intersect(&self, other: &TextRange) -> Option<TextRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TextRange::new(start, end))
    }
}

/// One recorded call against a [`MemoryDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `search_in_region`; `scope` is `None` for the whole body
    SearchInRegion {
        /// Range the search was confined to
        scope: Option<TextRange>,
        /// Query text as received
        query: String,
        /// Flags as received
        options: SearchOptions,
    },
    /// `search_across_regions`
    SearchAcrossRegions {
        /// Query text as received
        query: String,
        /// Flags as received
        options: SearchOptions,
    },
    /// `select`
    Select(TextRange),
    /// `sync`
    Sync,
}

impl HostCall {
    /// Whether this call was a search
    pub fn is_search(&self) -> bool {
        matches!(
            self,
            HostCall::SearchInRegion { .. } | HostCall::SearchAcrossRegions { .. }
        )
    }

    /// Query text of a search call
    pub fn query(&self) -> Option<&str> {
        match self {
            HostCall::SearchInRegion { query, .. } | HostCall::SearchAcrossRegions { query, .. } => {
                Some(query)
            }
            _ => None,
        }
    }
}

/// Failures to inject into a [`MemoryDocument`]
#[derive(Debug, Clone, Default)]
pub struct FaultPlan {
    failing_searches: BTreeSet<usize>,
    fail_selects: bool,
    fail_syncs: bool,
}

impl FaultPlan {
    /// No faults
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `ordinal`-th search call (1-based, counting both search kinds)
    pub fn fail_search(mut self, ordinal: usize) -> Self {
        self.failing_searches.insert(ordinal);
        self
    }

    /// Fail every `select`
    pub fn fail_selects(mut self) -> Self {
        self.fail_selects = true;
        self
    }

    /// Fail every `sync`
    pub fn fail_syncs(mut self) -> Self {
        self.fail_syncs = true;
        self
    }
}

#[derive(Debug, Default)]
struct HostState {
    calls: Vec<HostCall>,
    searches: usize,
    syncs: usize,
    selection: Option<TextRange>,
    invalidated: bool,
}

/// Plain-text document host
#[derive(Debug)]
pub struct MemoryDocument {
    text: Vec<char>,
    paragraphs: Vec<TextRange>,
    max_query_len: usize,
    faults: FaultPlan,
    log_calls: bool,
    state: Mutex<HostState>,
}

impl MemoryDocument {
    /// Build a document from text; each line is a paragraph
    ///
    /// A trailing `\r` on a line is dropped, so CRLF files load cleanly.
    pub fn from_text(text: &str) -> Self {
        Self::from_paragraphs(
            text.split(PARAGRAPH_BREAK)
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    /// Build a document from paragraphs
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = Vec::new();
        let mut ranges = Vec::new();

        for (idx, paragraph) in paragraphs.into_iter().enumerate() {
            if idx > 0 {
                text.push(PARAGRAPH_BREAK);
            }
            let start = text.len();
            text.extend(
                paragraph
                    .as_ref()
                    .chars()
                    .filter(|&ch| ch != PARAGRAPH_BREAK),
            );
            ranges.push(TextRange::new(start, text.len()));
        }

        Self {
            text,
            paragraphs: ranges,
            max_query_len: DEFAULT_MAX_QUERY_LEN,
            faults: FaultPlan::default(),
            log_calls: true,
            state: Mutex::new(HostState::default()),
        }
    }

    /// Override the query-length ceiling
    pub fn with_max_query_len(mut self, max_query_len: usize) -> Self {
        self.max_query_len = max_query_len;
        self
    }

    /// Inject failures
    pub fn with_faults(mut self, faults: FaultPlan) -> Self {
        self.faults = faults;
        self
    }

    /// Stop keeping the call log; search and sync counts are still kept
    pub fn without_call_log(mut self) -> Self {
        self.log_calls = false;
        self
    }

    /// Make every later call fail, as if the document had been closed
    pub fn invalidate(&self) {
        self.state.lock().invalidated = true;
    }

    /// Number of paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Range covered by paragraph `idx`
    pub fn paragraph_range(&self, idx: usize) -> Option<TextRange> {
        self.paragraphs.get(idx).copied()
    }

    /// Document length in characters, paragraph breaks included
    pub fn len_chars(&self) -> usize {
        self.text.len()
    }

    /// Text covered by `range`, clamped to the document
    pub fn text(&self, range: &TextRange) -> String {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        self.text[start..end].iter().collect()
    }

    /// The whole document with paragraphs joined by `\n`
    pub fn full_text(&self) -> String {
        self.text.iter().collect()
    }

    /// Every call made so far, in order
    ///
    /// The log grows by one entry per host call until [`clear_calls`](Self::clear_calls);
    /// long-lived documents can opt out with [`without_call_log`](Self::without_call_log).
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().calls.clone()
    }

    /// Number of search calls made so far
    pub fn search_count(&self) -> usize {
        self.state.lock().searches
    }

    /// Number of sync calls made so far
    pub fn sync_count(&self) -> usize {
        self.state.lock().syncs
    }

    /// Forget recorded calls; the selection is kept
    pub fn clear_calls(&self) {
        let mut state = self.state.lock();
        state.calls.clear();
        state.searches = 0;
        state.syncs = 0;
    }

    /// Current selection
    pub fn selection(&self) -> Option<TextRange> {
        self.state.lock().selection
    }

    /// Text of the current selection
    pub fn selected_text(&self) -> Option<String> {
        self.selection().map(|range| self.text(&range))
    }

    fn record(&self, call: HostCall) -> HostResult<()> {
        let mut state = self.state.lock();
        if state.invalidated {
            return Err(HostError::ContextInvalidated);
        }
        let is_search = call.is_search();
        if self.log_calls {
            state.calls.push(call);
        }
        if is_search {
            state.searches += 1;
            if self.faults.failing_searches.contains(&state.searches) {
                return Err(HostError::Search(format!(
                    "injected failure on search #{}",
                    state.searches
                )));
            }
        }
        Ok(())
    }

    fn check_request(&self, query: &str, options: SearchOptions) -> HostResult<()> {
        let len = query.chars().count();
        if len > self.max_query_len {
            return Err(HostError::QueryTooLong {
                len,
                max: self.max_query_len,
            });
        }
        if options.match_wildcards && options.ignore_punct {
            return Err(HostError::InvalidOptions(
                "wildcards cannot be combined with ignore_punct".to_string(),
            ));
        }
        Ok(())
    }

    fn check_range(&self, range: &TextRange) -> HostResult<()> {
        if range.start > range.end || range.end > self.text.len() {
            return Err(HostError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(())
    }

    fn search_segment(
        &self,
        segment: TextRange,
        query: &str,
        options: SearchOptions,
        cross_breaks: bool,
    ) -> HostResult<Vec<TextRange>> {
        let hay = &self.text[segment.start..segment.end];

        if !options.match_wildcards {
            let matcher =
                LiteralMatcher::new(query, options.match_case, options.ignore_punct, cross_breaks);
            return Ok(matcher.find_all(hay, segment.start));
        }

        let regex = wildcard::compile(query, options.match_case)?;
        let haystack: String = hay.iter().collect();
        let mut hits = Vec::new();
        // Byte offsets from the regex are walked forward into char offsets
        let mut byte_pos = 0;
        let mut char_pos = 0;
        for found in regex.find_iter(&haystack) {
            if found.start() == found.end() {
                continue;
            }
            char_pos += haystack[byte_pos..found.start()].chars().count();
            let len = found.as_str().chars().count();
            hits.push(TextRange::new(
                segment.start + char_pos,
                segment.start + char_pos + len,
            ));
            char_pos += len;
            byte_pos = found.end();
        }
        Ok(hits)
    }
}

#[async_trait]
impl DocumentHost for MemoryDocument {
    type Range = TextRange;

    fn max_query_len(&self) -> usize {
        self.max_query_len
    }

    async fn search_in_region(
        &self,
        scope: SearchScope<'_, TextRange>,
        query: &str,
        options: SearchOptions,
    ) -> HostResult<Vec<TextRange>> {
        let scope = match scope {
            SearchScope::Body => None,
            SearchScope::Within(range) => Some(*range),
        };
        self.record(HostCall::SearchInRegion {
            scope,
            query: query.to_string(),
            options,
        })?;
        self.check_request(query, options)?;

        let bounds = match scope {
            Some(range) => {
                self.check_range(&range)?;
                range
            }
            None => TextRange::new(0, self.text.len()),
        };

        let mut hits = Vec::new();
        for paragraph in &self.paragraphs {
            if let Some(segment) = paragraph.intersect(&bounds) {
                hits.extend(self.search_segment(segment, query, options, false)?);
            }
        }
        Ok(hits)
    }

    async fn search_across_regions(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> HostResult<Vec<TextRange>> {
        self.record(HostCall::SearchAcrossRegions {
            query: query.to_string(),
            options,
        })?;
        self.check_request(query, options)?;
        self.search_segment(TextRange::new(0, self.text.len()), query, options, true)
    }

    async fn select(&self, range: &TextRange) -> HostResult<()> {
        self.record(HostCall::Select(*range))?;
        if self.faults.fail_selects {
            return Err(HostError::Select("injected failure".to_string()));
        }
        self.check_range(range)?;
        self.state.lock().selection = Some(*range);
        Ok(())
    }

    async fn sync(&self) -> HostResult<()> {
        self.record(HostCall::Sync)?;
        let mut state = self.state.lock();
        state.syncs += 1;
        if self.faults.fail_syncs {
            return Err(HostError::Sync("injected failure".to_string()));
        }
        Ok(())
    }
}

impl RangeText for MemoryDocument {
    fn range_text(&self, range: &TextRange) -> Option<String> {
        self.check_range(range).ok().map(|_| self.text(range))
    }

    fn range_offsets(&self, range: &TextRange) -> Option<(usize, usize)> {
        self.check_range(range).ok().map(|_| (range.start, range.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_range_helpers() {
        let outer = TextRange::new(2, 10);
        assert_eq!(outer.len(), 8);
        assert!(!outer.is_empty());
        assert!(outer.contains(&TextRange::new(2, 10)));
        assert!(outer.contains(&TextRange::new(4, 6)));
        assert!(!outer.contains(&TextRange::new(1, 6)));
        assert_eq!(outer.intersect(&TextRange::new(8, 20)), Some(TextRange::new(8, 10)));
        assert_eq!(outer.intersect(&TextRange::new(10, 20)), None);
    }

    #[test]
    fn test_paragraph_layout() {
        let doc = MemoryDocument::from_text("First.\r\nSecond one.\n\nFourth.");
        assert_eq!(doc.paragraph_count(), 4);
        assert_eq!(doc.paragraph_range(0), Some(TextRange::new(0, 6)));
        assert_eq!(doc.paragraph_range(1), Some(TextRange::new(7, 18)));
        assert_eq!(doc.paragraph_range(2), Some(TextRange::new(19, 19)));
        assert_eq!(doc.full_text(), "First.\nSecond one.\n\nFourth.");
        assert_eq!(doc.text(&TextRange::new(7, 13)), "Second");
    }

    #[test]
    fn test_text_is_clamped() {
        let doc = MemoryDocument::from_text("short");
        assert_eq!(doc.text(&TextRange::new(2, 99)), "ort");
        assert_eq!(doc.text(&TextRange::new(50, 99)), "");
    }

    #[test]
    fn test_call_helpers() {
        let call = HostCall::SearchAcrossRegions {
            query: "q".to_string(),
            options: SearchOptions::exact(),
        };
        assert!(call.is_search());
        assert_eq!(call.query(), Some("q"));
        assert!(!HostCall::Sync.is_search());
        assert_eq!(HostCall::Select(TextRange::new(0, 1)).query(), None);
    }

    #[test]
    fn test_call_log_opt_out_keeps_counts() {
        let doc = MemoryDocument::from_text("Fees are due.").without_call_log();
        futures::executor::block_on(async {
            doc.search_in_region(SearchScope::Body, "due", SearchOptions::exact())
                .await
                .unwrap();
            doc.sync().await.unwrap();
        });
        assert!(doc.calls().is_empty());
        assert_eq!(doc.search_count(), 1);
        assert_eq!(doc.sync_count(), 1);
    }

    #[test]
    fn test_range_capabilities_agree_on_bounds() {
        let doc = MemoryDocument::from_text("short");
        let inside = TextRange::new(1, 3);
        assert_eq!(doc.range_offsets(&inside), Some((1, 3)));
        assert_eq!(doc.range_text(&inside).as_deref(), Some("ho"));

        let outside = TextRange::new(2, 99);
        assert_eq!(doc.range_offsets(&outside), None);
        assert_eq!(doc.range_text(&outside), None);
    }
}
