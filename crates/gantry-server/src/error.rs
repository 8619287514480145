//! Server error types.

use thiserror::Error;

/// Errors that can occur while serving plugin metadata.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The external naming service could not supply the plugin name.
    #[error("Failed to resolve plugin name: {0}")]
    NameUnavailable(String),
}

impl ServerError {
    /// Creates a name-resolution failure with the given reason.
    pub fn name_unavailable(reason: impl Into<String>) -> Self {
        Self::NameUnavailable(reason.into())
    }
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
