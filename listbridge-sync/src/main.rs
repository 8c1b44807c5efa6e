//! listbridge - Main entry point.

use anyhow::Result;
use listbridge_common::config::Config;
use listbridge_common::logging::init_logging;
use listbridge_sync::run;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    init_logging(&config.log_level, &config.log_format);

    tracing::info!("listbridge v{}", env!("CARGO_PKG_VERSION"));

    // Run the sync loop until shutdown
    run(&config).await
}
