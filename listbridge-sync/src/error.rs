//! Error taxonomy for the sync engine.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Failures a sync cycle can hit.
///
/// All of these abort at most the current cycle (or the current item); the
/// scheduler logs them and re-polls on the next tick.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Cookie jar missing, unreadable, or in an unrecognized shape.
    #[error("Cookie jar unavailable: {0}")]
    CookieJar(String),

    /// Cookie jar loaded but empty: no credentials to authenticate with.
    #[error("No credentials: cookie jar is empty")]
    NoCredentials,

    /// Remote endpoint answered with a non-2xx status.
    #[error("Source returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Transport-level failure (timeout, DNS, connection reset).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
