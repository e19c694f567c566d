//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Delivery client error.
    #[error("{0}")]
    Client(#[from] folio_client::ClientError),

    /// Entry document error.
    #[error("{0}")]
    Content(#[from] folio_content::ContentError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// Input snapshot not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Refusing to overwrite an existing config file.
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) | Self::ConfigExists(_) => 1,
            // Not found: 2
            Self::FileNotFound(_) => 2,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) => 3,
            // Delivery errors: 5
            Self::Client(_) => 5,
            // IO errors: 9
            Self::Io(_) => 9,
            // Decode/format errors: 10
            Self::Content(_) | Self::Json(_) => 10,
        }
    }

    /// Recovery hint shown under the error message, when one exists.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => {
                Some("Run 'folio init' and set cms.space_id and cms.access_token.")
            }
            Self::Client(folio_client::ClientError::Config(_)) => {
                Some("Run 'folio init' and set cms.space_id and cms.access_token.")
            }
            Self::FileNotFound(_) => {
                Some("Run 'folio fetch' to create a local snapshot first.")
            }
            Self::ConfigExists(_) => Some("Pass --force to overwrite it."),
            _ => None,
        }
    }
}
