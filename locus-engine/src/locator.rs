//! Locator and builder
//!
//! [`Locator::locate`] runs the sentence chain, then the highlight chain
//! scoped to the sentence range, then selects the result. Every host failure
//! is absorbed; the outcome says what happened.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::executor;
use crate::outcome::{HighlightStatus, LocateOutcome, MissReason};
use crate::plan::TierPlan;
use crate::tier::TierKind;
use locus_core::{DocumentHost, LocationQuery, SearchScope};
use log::{debug, info, warn};

/// Relocates annotated text in a document host
///
/// Holds configuration only. Each call to [`locate`](Self::locate) is
/// self-contained, so one locator can serve concurrent operations.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    config: EngineConfig,
}

impl Locator {
    /// Locator with the default five-tier sentence chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator with a custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a builder
    pub fn builder() -> LocatorBuilder {
        LocatorBuilder::new()
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Query ceiling for `host`
    pub fn ceiling_for<H>(&self, host: &H) -> usize
    where
        H: DocumentHost + ?Sized,
    {
        self.config.effective_ceiling(host.max_query_len())
    }

    /// Find the sentence without selecting it
    pub async fn find_sentence<H>(&self, host: &H, sentence: &str) -> Option<(TierKind, H::Range)>
    where
        H: DocumentHost + ?Sized,
    {
        if sentence.is_empty() {
            return None;
        }
        let ceiling = self.ceiling_for(host);
        executor::first_hit(
            host,
            SearchScope::Body,
            &self.config.sentence_plan,
            sentence,
            ceiling,
        )
        .await
    }

    /// Find `highlight` inside `sentence` without selecting it
    ///
    /// Never searches outside `sentence`.
    pub async fn find_highlight<H>(
        &self,
        host: &H,
        sentence: &H::Range,
        highlight: &str,
    ) -> Option<(TierKind, H::Range)>
    where
        H: DocumentHost + ?Sized,
    {
        if highlight.is_empty() {
            return None;
        }
        let ceiling = self.ceiling_for(host);
        executor::first_hit(
            host,
            SearchScope::Within(sentence),
            &self.config.highlight_plan,
            highlight,
            ceiling,
        )
        .await
    }

    /// Find the query's text and move the host selection to it
    pub async fn locate<H>(&self, host: &H, query: &LocationQuery) -> LocateOutcome<H::Range>
    where
        H: DocumentHost + ?Sized,
    {
        if let Err(err) = query.validate() {
            info!("{err}");
            return LocateOutcome::NotFound(MissReason::EmptyQuery);
        }

        let Some((sentence_tier, sentence)) =
            self.find_sentence(host, &query.sentence_text).await
        else {
            info!(
                "sentence not found after {} tier(s)",
                self.config.sentence_plan.len()
            );
            return LocateOutcome::NotFound(MissReason::Exhausted);
        };
        debug!("sentence found by tier {sentence_tier}");

        let mut highlight = HighlightStatus::NotRequested;
        if let Some(text) = query.highlight() {
            match self.find_highlight(host, &sentence, text).await {
                Some((tier, range)) => {
                    debug!("highlight found by tier {tier}");
                    if executor::select(host, &range).await {
                        return LocateOutcome::Located {
                            range,
                            sentence_tier,
                            highlight: HighlightStatus::Found(tier),
                        };
                    }
                    warn!("could not select highlight, selecting the sentence instead");
                }
                None => info!("highlight not found inside the sentence, selecting the sentence"),
            }
            highlight = HighlightStatus::Degraded;
        }

        if executor::select(host, &sentence).await {
            LocateOutcome::Located {
                range: sentence,
                sentence_tier,
                highlight,
            }
        } else {
            LocateOutcome::NotFound(MissReason::SelectionFailed)
        }
    }
}

/// Builder for [`Locator`]
///
/// Provides a fluent interface for configuring the locator.
#[derive(Debug, Clone)]
pub struct LocatorBuilder {
    config: EngineConfig,
    ignore_punctuation: bool,
    cross_region: bool,
}

impl Default for LocatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LocatorBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            ignore_punctuation: true,
            cross_region: true,
        }
    }

    /// Replace the sentence chain
    pub fn sentence_plan(mut self, plan: TierPlan) -> Self {
        self.config.sentence_plan = plan;
        self
    }

    /// Replace the highlight chain
    pub fn highlight_plan(mut self, plan: TierPlan) -> Self {
        self.config.highlight_plan = plan;
        self
    }

    /// Cap query length below the host's ceiling
    pub fn query_ceiling(mut self, ceiling: Option<usize>) -> Self {
        self.config.query_ceiling = ceiling;
        self
    }

    /// Keep or drop punctuation-insensitive tiers
    pub fn ignore_punctuation(mut self, enabled: bool) -> Self {
        self.ignore_punctuation = enabled;
        self
    }

    /// Keep or drop cross-region tiers
    pub fn cross_region(mut self, enabled: bool) -> Self {
        self.cross_region = enabled;
        self
    }

    /// Drop punctuation-insensitive tiers, as in [`EngineConfig::strict`]
    ///
    /// Plans and ceiling set earlier are kept.
    pub fn strict(self) -> Self {
        self.ignore_punctuation(false)
    }

    /// Build the configuration without creating a locator
    pub fn build_config(self) -> Result<EngineConfig> {
        let mut config = self.config;
        if !self.ignore_punctuation {
            config.sentence_plan = config.sentence_plan.without_punctuation_tiers();
            config.highlight_plan = config.highlight_plan.without_punctuation_tiers();
        }
        if !self.cross_region {
            config.sentence_plan = config.sentence_plan.without_cross_region_tiers();
        }
        config.validate()?;
        Ok(config)
    }

    /// Build the locator
    pub fn build(self) -> Result<Locator> {
        Locator::with_config(self.build_config()?)
    }
}
