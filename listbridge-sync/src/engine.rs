//! Reconciliation engine: one fetch-filter-forward-complete pass.
//!
//! Per cycle the engine re-derives the actionable set from the source's
//! current truth, so no outcome is persisted and every failure self-heals on
//! the next poll. Items are handled strictly sequentially in source order;
//! an item is only ever marked completed after its forward succeeded in the
//! same cycle.

use serde::Serialize;

use crate::client::SourceClient;
use crate::error::SyncResult;
use crate::extract::{extract_list_items, filter_incomplete, item_name};
use crate::forward::ForwardGateway;

/// Per-item result of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Forwarded to the target and marked completed on the source.
    Forwarded,
    /// Webhook refused or was unreachable; item stays actionable.
    ForwardFailed,
    /// Forwarded, but the completion PUT failed; the item will be forwarded
    /// again next cycle (documented at-least-once semantics).
    CompletionFailed,
}

/// Aggregated outcome counts for one cycle. Never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub forwarded: usize,
    pub forward_failed: usize,
    pub completion_failed: usize,
}

impl CycleReport {
    /// Record one item's outcome.
    pub fn record(&mut self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Forwarded => self.forwarded += 1,
            SyncOutcome::ForwardFailed => self.forward_failed += 1,
            SyncOutcome::CompletionFailed => self.completion_failed += 1,
        }
    }

    /// Number of items processed this cycle.
    pub fn total(&self) -> usize {
        self.forwarded + self.forward_failed + self.completion_failed
    }
}

/// Run one full sync cycle.
///
/// A fetch failure aborts the cycle (nothing has been read yet, so no
/// partial progress is lost). Per-item failures are contained: one item's
/// failure never stops the items after it.
pub async fn run_cycle(
    source: &SourceClient,
    gateway: &ForwardGateway,
) -> SyncResult<CycleReport> {
    let payload = source.get_list_items().await?;

    let Some(items) = extract_list_items(&payload) else {
        tracing::info!("No list items found in source payload");
        return Ok(CycleReport::default());
    };

    let pending = filter_incomplete(items);
    tracing::debug!(total = items.len(), pending = pending.len(), "Fetched source list");

    let mut report = CycleReport::default();
    for item in &pending {
        let name = item_name(item);

        if !gateway.forward(name).await {
            // Not completed on the source, so it stays actionable and will
            // be retried next cycle.
            report.record(SyncOutcome::ForwardFailed);
            continue;
        }

        match source.mark_completed(item).await {
            Ok(()) => {
                tracing::info!(item = %name, "Item marked as completed");
                report.record(SyncOutcome::Forwarded);
            }
            Err(e) => {
                // Forwarded but not acknowledged; no re-PUT this cycle. The
                // next cycle forwards it again, so the target must treat
                // duplicate creation as idempotent.
                tracing::error!(item = %name, error = %e, "Failed to mark item as completed");
                report.record(SyncOutcome::CompletionFailed);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_records_each_outcome_kind() {
        let mut report = CycleReport::default();
        report.record(SyncOutcome::Forwarded);
        report.record(SyncOutcome::Forwarded);
        report.record(SyncOutcome::ForwardFailed);
        report.record(SyncOutcome::CompletionFailed);

        assert_eq!(report.forwarded, 2);
        assert_eq!(report.forward_failed, 1);
        assert_eq!(report.completion_failed, 1);
        assert_eq!(report.total(), 4);
    }

    #[test]
    fn empty_report_serializes_with_zero_counts() {
        let json = serde_json::to_value(CycleReport::default()).unwrap();
        assert_eq!(json["forwarded"], 0);
        assert_eq!(json["forward_failed"], 0);
        assert_eq!(json["completion_failed"], 0);
    }
}
