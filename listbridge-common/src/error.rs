//! Error types shared across the listbridge workspace.

use thiserror::Error;

/// Result type alias using the listbridge error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for listbridge services.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error. Fatal at startup, never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Check if this is a configuration error.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
