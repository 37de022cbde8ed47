//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use locus_core::{LocationQuery, RangeText};
use locus_engine::{HighlightStatus, LocateOutcome, MissReason, TierKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A stored playbook rule: where it applies and what to highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Unique identifier
    pub id: String,

    /// Human-readable title
    #[serde(default)]
    pub title: String,

    /// The sentence the rule was captured from
    pub location_text: String,

    /// Optional phrase inside the sentence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_text: Option<String>,
}

impl RuleRecord {
    /// Create a rule without a highlight
    pub fn new(id: impl Into<String>, location_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            location_text: location_text.into(),
            selection_text: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the highlight
    pub fn with_selection(mut self, selection_text: impl Into<String>) -> Self {
        self.selection_text = Some(selection_text.into());
        self
    }

    /// Query the locator runs for this rule
    ///
    /// A blank selection text counts as no highlight.
    pub fn to_query(&self) -> LocationQuery {
        let query = LocationQuery::sentence(self.location_text.clone());
        match self.selection_text.as_deref() {
            Some(text) if !text.trim().is_empty() => query.with_highlight(text),
            _ => query,
        }
    }
}

/// Ordered collection of rules, loaded from JSON or TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rules in file order
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

impl RuleSet {
    /// Wrap rules, rejecting blank or duplicate ids
    pub fn new(rules: Vec<RuleRecord>) -> Result<Self> {
        let set = Self { rules };
        set.validate()?;
        Ok(set)
    }

    /// Parse JSON: either an array of rules or `{"rules": [...]}`
    pub fn from_json_str(text: &str) -> Result<Self> {
        let set = match serde_json::from_str::<Vec<RuleRecord>>(text) {
            Ok(rules) => Self { rules },
            Err(_) => serde_json::from_str::<RuleSet>(text)?,
        };
        set.validate()?;
        Ok(set)
    }

    /// Parse TOML with a `[[rules]]` array
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let set: RuleSet = toml::from_str(text)?;
        set.validate()?;
        Ok(set)
    }

    /// Load a `.json` or `.toml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&text),
            other => Err(ApiError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Check ids are present and unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.id.trim().is_empty() {
                return Err(ApiError::InvalidRule {
                    id: rule.id.clone(),
                    reason: "id is empty".to_string(),
                });
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(ApiError::InvalidRule {
                    id: rule.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Where a located rule ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInfo {
    /// First character, if the host reports offsets
    pub start: Option<usize>,
    /// One past the last character, if the host reports offsets
    pub end: Option<usize>,
    /// Selected text, if the host can render it
    pub text: Option<String>,
}

/// Result of locating one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocateReport {
    /// Rule identifier
    pub rule_id: String,
    /// Rule title
    pub title: String,
    /// Whether anything was selected
    pub located: bool,
    /// Tier that found the sentence
    pub sentence_tier: Option<TierKind>,
    /// What happened to the highlight
    pub highlight: Option<HighlightStatus>,
    /// Why nothing was selected
    pub miss_reason: Option<MissReason>,
    /// The selected range
    pub selection: Option<SelectionInfo>,
}

impl LocateReport {
    /// Build a report from a locate outcome
    pub fn from_outcome<H>(rule: &RuleRecord, outcome: &LocateOutcome<H::Range>, host: &H) -> Self
    where
        H: RangeText + ?Sized,
    {
        let selection = outcome.range().map(|range| {
            let offsets = host.range_offsets(range);
            SelectionInfo {
                start: offsets.map(|(start, _)| start),
                end: offsets.map(|(_, end)| end),
                text: host.range_text(range),
            }
        });

        Self {
            rule_id: rule.id.clone(),
            title: rule.title.clone(),
            located: outcome.is_located(),
            sentence_tier: outcome.sentence_tier(),
            highlight: outcome.highlight(),
            miss_reason: outcome.miss_reason(),
            selection,
        }
    }

    /// Located, but the highlight fell back to the sentence
    pub fn is_degraded(&self) -> bool {
        self.highlight == Some(HighlightStatus::Degraded)
    }
}

/// Counts over a batch of reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Rules processed
    pub total: usize,
    /// Rules located with the requested precision
    pub located: usize,
    /// Rules located at sentence level only, because the highlight was missed
    pub degraded: usize,
    /// Rules with nothing selected
    pub not_found: usize,
}

impl BatchSummary {
    /// Tally reports
    pub fn from_reports(reports: &[LocateReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.total += 1;
            if !report.located {
                summary.not_found += 1;
            } else if report.is_degraded() {
                summary.degraded += 1;
            } else {
                summary.located += 1;
            }
            summary
        })
    }
}

/// Reports for a batch plus their summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutput {
    /// One report per rule, in rule order
    pub reports: Vec<LocateReport>,
    /// Counts over `reports`
    pub summary: BatchSummary,
}

impl From<Vec<LocateReport>> for BatchOutput {
    fn from(reports: Vec<LocateReport>) -> Self {
        let summary = BatchSummary::from_reports(&reports);
        Self { reports, summary }
    }
}
