//! Error types for Exa client.

use thiserror::Error;

/// Result type for Exa client operations.
pub type Result<T> = std::result::Result<T, ExaError>;

/// Exa client errors.
#[derive(Debug, Error)]
pub enum ExaError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("Exa API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
