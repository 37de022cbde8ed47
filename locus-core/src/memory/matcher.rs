//! Literal matching over document characters
//!
//! Supports case-insensitive comparison, skipping punctuation on both sides,
//! and letting a paragraph break in the document stand in for one whitespace
//! character of the query (or for nothing at all) when matches may cross
//! regions.

use super::{TextRange, PARAGRAPH_BREAK};
use crate::normalize::is_punctuation;
use std::collections::HashSet;

/// Compiled literal query
pub(crate) struct LiteralMatcher {
    needle: Vec<char>,
    match_case: bool,
    ignore_punct: bool,
    cross_breaks: bool,
}

impl LiteralMatcher {
    pub(crate) fn new(query: &str, match_case: bool, ignore_punct: bool, cross_breaks: bool) -> Self {
        let needle = query
            .chars()
            .filter(|&ch| !(ignore_punct && is_punctuation(ch)))
            .collect();
        Self {
            needle,
            match_case,
            ignore_punct,
            cross_breaks,
        }
    }

    /// Non-overlapping matches in `hay`, left to right
    ///
    /// `base` is the document offset of `hay[0]`.
    pub(crate) fn find_all(&self, hay: &[char], base: usize) -> Vec<TextRange> {
        let mut matches = Vec::new();
        if self.needle.is_empty() {
            return matches;
        }

        // Whether (h, n) can finish a match does not depend on where the
        // match started, so dead states are shared across start positions
        let mut dead = HashSet::new();
        let mut start = 0;
        while start < hay.len() {
            let ch = hay[start];
            if ch == PARAGRAPH_BREAK || (self.ignore_punct && is_punctuation(ch)) {
                start += 1;
                continue;
            }
            match self.walk(hay, start, 0, &mut dead) {
                Some(end) => {
                    matches.push(TextRange::new(base + start, base + end));
                    start = end;
                }
                None => start += 1,
            }
        }
        matches
    }

    /// Match the needle from `n` against `hay` from `h`; returns the exclusive end
    ///
    /// At a paragraph break the walk may either consume one whitespace
    /// character of the needle or skip the break. Break states that cannot
    /// lead to a match are recorded in `dead` and never explored twice.
    fn walk(
        &self,
        hay: &[char],
        mut h: usize,
        mut n: usize,
        dead: &mut HashSet<(usize, usize)>,
    ) -> Option<usize> {
        let mut visited = Vec::new();
        let end = loop {
            if n == self.needle.len() {
                break Some(h);
            }
            let Some(&ch) = hay.get(h) else {
                break None;
            };

            if ch == PARAGRAPH_BREAK {
                if !self.cross_breaks || dead.contains(&(h, n)) {
                    break None;
                }
                visited.push((h, n));
                if self.needle[n].is_whitespace() {
                    if let Some(end) = self.walk(hay, h + 1, n + 1, dead) {
                        break Some(end);
                    }
                }
                h += 1;
                continue;
            }

            if self.ignore_punct && is_punctuation(ch) {
                h += 1;
                continue;
            }

            if !self.chars_eq(ch, self.needle[n]) {
                break None;
            }
            h += 1;
            n += 1;
        };

        if end.is_none() {
            dead.extend(visited);
        }
        end
    }

    #[inline]
    fn chars_eq(&self, a: char, b: char) -> bool {
        a == b || (!self.match_case && a.to_lowercase().eq(b.to_lowercase()))
    }
}
