//! Locate outcomes

use crate::tier::TierKind;
use std::fmt;

/// What happened to the highlight part of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", content = "tier", rename_all = "snake_case")
)]
pub enum HighlightStatus {
    /// The query had no highlight; the sentence is selected
    NotRequested,
    /// The highlight was found inside the sentence by the given tier
    Found(TierKind),
    /// The highlight could not be found or selected; the sentence is selected
    Degraded,
}

/// Why nothing was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MissReason {
    /// The query had no sentence text; no host call was made
    EmptyQuery,
    /// Every sentence tier missed
    Exhausted,
    /// A range was found but the host refused to select it
    SelectionFailed,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::EmptyQuery => f.write_str("nothing to locate"),
            MissReason::Exhausted => f.write_str("not found"),
            MissReason::SelectionFailed => f.write_str("selection failed"),
        }
    }
}

/// Result of a locate operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateOutcome<R> {
    /// A range was found and is now the host's selection
    Located {
        /// The selected range (highlight, or sentence when degraded)
        range: R,
        /// Tier that found the sentence
        sentence_tier: TierKind,
        /// What happened to the highlight
        highlight: HighlightStatus,
    },
    /// Nothing was selected; the host's previous selection is untouched
    NotFound(MissReason),
}

impl<R> LocateOutcome<R> {
    /// Whether something was selected
    pub fn is_located(&self) -> bool {
        matches!(self, LocateOutcome::Located { .. })
    }

    /// Whether the selection is coarser than requested
    pub fn is_partial(&self) -> bool {
        matches!(
            self,
            LocateOutcome::Located {
                highlight: HighlightStatus::Degraded,
                ..
            }
        )
    }

    /// The selected range
    pub fn range(&self) -> Option<&R> {
        match self {
            LocateOutcome::Located { range, .. } => Some(range),
            LocateOutcome::NotFound(_) => None,
        }
    }

    /// Take the selected range
    pub fn into_range(self) -> Option<R> {
        match self {
            LocateOutcome::Located { range, .. } => Some(range),
            LocateOutcome::NotFound(_) => None,
        }
    }

    /// Tier that found the sentence
    pub fn sentence_tier(&self) -> Option<TierKind> {
        match self {
            LocateOutcome::Located { sentence_tier, .. } => Some(*sentence_tier),
            LocateOutcome::NotFound(_) => None,
        }
    }

    /// Highlight status, when located
    pub fn highlight(&self) -> Option<HighlightStatus> {
        match self {
            LocateOutcome::Located { highlight, .. } => Some(*highlight),
            LocateOutcome::NotFound(_) => None,
        }
    }

    /// Reason for a miss
    pub fn miss_reason(&self) -> Option<MissReason> {
        match self {
            LocateOutcome::Located { .. } => None,
            LocateOutcome::NotFound(reason) => Some(*reason),
        }
    }
}
