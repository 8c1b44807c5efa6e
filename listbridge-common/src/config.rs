//! Configuration for listbridge services.
//!
//! All configuration comes from the process environment (the deployment
//! target injects it). Three values are required; everything else has a
//! default. Missing required variables are collected and reported together
//! so operators fix them in one pass.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default delay between sync cycles, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Runtime configuration for the sync service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target webhook URL items are forwarded to.
    pub webhook_url: String,
    /// Path to the serialized cookie jar produced by the out-of-band login flow.
    pub cookie_path: PathBuf,
    /// Base URL of the source list API (no trailing slash).
    pub source_api_url: String,
    /// Delay between sync cycles, in seconds.
    pub poll_interval_secs: u64,
    /// Base log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format: "json" or "pretty".
    pub log_format: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// The indirection keeps tests off the (process-global) environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let webhook_url = lookup("LISTBRIDGE_WEBHOOK_URL");
        let cookie_path = lookup("LISTBRIDGE_COOKIE_PATH");
        let source_api_url = lookup("LISTBRIDGE_SOURCE_API_URL");

        let missing: Vec<&str> = [
            ("LISTBRIDGE_WEBHOOK_URL", &webhook_url),
            ("LISTBRIDGE_COOKIE_PATH", &cookie_path),
            ("LISTBRIDGE_SOURCE_API_URL", &source_api_url),
        ]
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        // The filters above guarantee all three are present and non-empty.
        let webhook_url = webhook_url.unwrap_or_default();
        let cookie_path = cookie_path.unwrap_or_default();
        let source_api_url = source_api_url.unwrap_or_default();

        validate_url("LISTBRIDGE_WEBHOOK_URL", &webhook_url)?;
        validate_url("LISTBRIDGE_SOURCE_API_URL", &source_api_url)?;

        let poll_interval_secs = match lookup("LISTBRIDGE_POLL_INTERVAL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!(
                    "LISTBRIDGE_POLL_INTERVAL_SECS must be a whole number of seconds, got {raw:?}"
                ))
            })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            webhook_url,
            cookie_path: PathBuf::from(cookie_path),
            source_api_url: source_api_url.trim_end_matches('/').to_string(),
            poll_interval_secs,
            log_level: lookup("LISTBRIDGE_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format: lookup("LISTBRIDGE_LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
        })
    }
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    url::Url::parse(value)
        .map_err(|e| Error::Config(format!("{name} is not a valid URL ({value:?}): {e}")))?;
    Ok(())
}
