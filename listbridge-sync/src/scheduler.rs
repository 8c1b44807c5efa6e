//! Fixed-delay driver for the sync cycle.
//!
//! The cycle is injected as a closure so the loop can be exercised in tests
//! without real endpoints or real time. Cycles never overlap: the next one
//! starts only after the previous fully returned and the delay elapsed.

use std::future::Future;
use std::time::Duration;

use crate::engine::CycleReport;
use crate::error::SyncResult;

/// Run cycles forever with a fixed delay between them.
///
/// A failed cycle is logged and swallowed; the loop always continues to the
/// next tick.
pub async fn run_forever<F, Fut>(interval: Duration, mut cycle: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SyncResult<CycleReport>>,
{
    loop {
        step(&mut cycle).await;
        tokio::time::sleep(interval).await;
    }
}

/// Run one cycle and log its outcome.
async fn step<F, Fut>(cycle: &mut F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SyncResult<CycleReport>>,
{
    match cycle().await {
        Ok(report) if report.total() == 0 => {
            tracing::debug!("Sync cycle finished: nothing to do");
        }
        Ok(report) => {
            tracing::info!(
                forwarded = report.forwarded,
                forward_failed = report.forward_failed,
                completion_failed = report.completion_failed,
                "Sync cycle finished"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Sync cycle failed");
        }
    }
}
