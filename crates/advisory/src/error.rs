//! Advisory errors - HTTP and decode failures.

use thiserror::Error;

/// Advisory layer errors
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for AdvisoryError
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;
