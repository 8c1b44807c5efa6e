//! Shared utilities for the listbridge workspace.
//!
//! Provides the pieces every listbridge service needs but that carry no
//! synchronization logic of their own:
//! - environment-driven configuration ([`config`])
//! - the common error type ([`error`])
//! - structured logging setup ([`logging`])

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
