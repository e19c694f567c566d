//! Error types for the content layer.
//!
//! Only whole-document decoding can fail here. Field-level weirdness inside
//! an entry is an expected outcome and degrades to `None` members during
//! mapping instead of erroring.

use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = std::result::Result<T, ContentError>;

/// Errors that can occur while decoding entry documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    /// The document is not valid JSON or does not match the entry shape.
    #[error("failed to decode entry document: {0}")]
    Decode(#[from] serde_json::Error),

    /// The document decoded but is neither an entry array nor a collection.
    #[error("unexpected entry document shape: {0}")]
    Shape(String),
}
