//! listbridge-sync - unidirectional list synchronizer.
//!
//! Polls a cookie-authenticated source list for items that are not yet
//! completed, creates each on a target webhook, and marks the source item
//! completed only after the webhook accepted it.
//!
//! ```text
//! source API ──GET──▶ extract ──filter──▶ engine ──POST──▶ target webhook
//!      ▲                                    │
//!      └────────────PUT completed=true──────┘ (only on webhook success)
//! ```
//!
//! The engine is stateless across cycles: every poll re-derives the
//! actionable set from the source, so transient failures self-heal on the
//! next tick. Forwarding is at-least-once; completion is acknowledged on
//! the source only after a successful forward in the same cycle.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod client;
pub mod cookies;
pub mod engine;
pub mod error;
pub mod extract;
pub mod forward;
pub mod scheduler;

// Re-export commonly used types
pub use client::SourceClient;
pub use cookies::load_cookies;
pub use engine::{run_cycle, CycleReport, SyncOutcome};
pub use error::{SyncError, SyncResult};
pub use extract::{extract_list_items, filter_incomplete, item_name};
pub use forward::ForwardGateway;

use std::time::Duration;

use listbridge_common::config::Config;

/// Run the sync service until ctrl-c.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let source = SourceClient::new(config.source_api_url.clone(), config.cookie_path.clone());
    let gateway = ForwardGateway::new(config.webhook_url.clone());
    let interval = Duration::from_secs(config.poll_interval_secs);

    tracing::info!(
        source = %config.source_api_url,
        webhook = %config.webhook_url,
        interval_secs = config.poll_interval_secs,
        "Starting sync loop"
    );

    tokio::select! {
        () = scheduler::run_forever(interval, || engine::run_cycle(&source, &gateway)) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received ctrl-c, shutting down");
        }
    }

    Ok(())
}
