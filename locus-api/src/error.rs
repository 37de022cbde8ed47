//! API error types

use locus_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML parse error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule record that cannot be used
    #[error("invalid rule {id:?}: {reason}")]
    InvalidRule {
        /// Rule identifier as given
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// Rules file with an extension other than `.json` or `.toml`
    #[error("unsupported rules format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
