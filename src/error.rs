//! Error types for the reserve overview
//!
//! Structured errors via thiserror; the binary propagates with anyhow.

use thiserror::Error;

/// Main error type for reserve overview operations
#[derive(Error, Debug)]
pub enum ReserveError {
    /// Configuration could not be loaded or merged
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or API payload could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rates history request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rates history endpoint answered with a non-success status
    #[error("Rates history unavailable: {0}")]
    HistoryUnavailable(String),

    /// Clipboard write was rejected
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Wallet bridge refused a request
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// No reserve matches the requested asset
    #[error("Reserve not found: {0}")]
    ReserveNotFound(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for reserve overview operations
pub type Result<T> = std::result::Result<T, ReserveError>;

impl From<anyhow::Error> for ReserveError {
    fn from(err: anyhow::Error) -> Self {
        ReserveError::Other(err.to_string())
    }
}
