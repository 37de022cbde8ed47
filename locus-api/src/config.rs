//! High-level configuration API
//!
//! [`Config`] is what users write in a TOML file. It is turned into an
//! [`EngineConfig`] for the locator plus the settings of the in-memory host
//! used for plain-text documents.

use crate::error::{ApiError, Result};
use locus_core::DEFAULT_MAX_QUERY_LEN;
use locus_engine::{EngineConfig, LocatorBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// High-level configuration for locating rules
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which tiers run and how long queries may be
    #[serde(default)]
    pub locator: LocatorSection,

    /// Settings of the in-memory document host
    #[serde(default)]
    pub document: DocumentSection,
}

/// `[locator]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocatorSection {
    /// Include the punctuation-insensitive tiers
    pub ignore_punctuation: bool,

    /// Include the cross-region sentence tiers
    pub cross_region: bool,

    /// Cap on query length, never above the host's own ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_ceiling: Option<usize>,
}

impl Default for LocatorSection {
    fn default() -> Self {
        Self {
            ignore_punctuation: true,
            cross_region: true,
            query_ceiling: None,
        }
    }
}

/// `[document]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentSection {
    /// Query-length ceiling reported by the in-memory host
    pub max_query_len: usize,
}

impl Default for DocumentSection {
    fn default() -> Self {
        Self {
            max_query_len: DEFAULT_MAX_QUERY_LEN,
        }
    }
}

impl Config {
    /// Configuration without punctuation-insensitive tiers
    pub fn strict() -> Self {
        Self {
            locator: LocatorSection {
                ignore_punctuation: false,
                ..LocatorSection::default()
            },
            ..Self::default()
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.locator.query_ceiling == Some(0) {
            return Err(ApiError::Config(
                "locator.query_ceiling must be at least 1".to_string(),
            ));
        }
        if self.document.max_query_len == 0 {
            return Err(ApiError::Config(
                "document.max_query_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Engine configuration for these settings
    pub fn to_engine_config(&self) -> Result<EngineConfig> {
        self.validate()?;
        let config = LocatorBuilder::new()
            .ignore_punctuation(self.locator.ignore_punctuation)
            .cross_region(self.locator.cross_region)
            .query_ceiling(self.locator.query_ceiling)
            .build_config()?;
        Ok(config)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Keep or drop the punctuation-insensitive tiers
    pub fn ignore_punctuation(mut self, enabled: bool) -> Self {
        self.config.locator.ignore_punctuation = enabled;
        self
    }

    /// Keep or drop the cross-region tiers
    pub fn cross_region(mut self, enabled: bool) -> Self {
        self.config.locator.cross_region = enabled;
        self
    }

    /// Cap query length
    pub fn query_ceiling(mut self, ceiling: Option<usize>) -> Self {
        self.config.locator.query_ceiling = ceiling;
        self
    }

    /// Set the in-memory host's query ceiling
    pub fn max_query_len(mut self, max: usize) -> Self {
        self.config.document.max_query_len = max;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
