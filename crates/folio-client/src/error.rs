//! Error types for the delivery client.

use folio_content::ContentError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the delivery API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Client configuration is unusable (missing space id or token).
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// HTTP transport failure (connection, TLS, timeout).
    #[error("delivery request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("delivery api returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The response body did not decode into entries.
    #[error(transparent)]
    Content(#[from] ContentError),
}

impl ClientError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
