//! Async driver for [`BatchRun`].

use pharmasync_inventory::{BatchReport, BatchRun, StockEdit};

use crate::backend::InventoryBackend;

/// Send `edits` to the backend one at a time, in order.
///
/// The first failed edit ends the batch: later edits are never sent, and
/// edits already applied stay applied. No retries.
pub async fn submit_batch<B>(backend: &B, edits: Vec<StockEdit>) -> BatchReport
where
    B: InventoryBackend + ?Sized,
{
    let total = edits.len();
    let mut run = BatchRun::new(edits);

    tracing::info!(edits = total, "submitting stock batch");

    while let Some(edit) = run.next_edit().cloned() {
        match backend.update_stock(&edit).await {
            Ok(()) => {
                tracing::debug!(pharmacy = %edit.pharmacy, medicine = %edit.medicine, "edit applied");
                run.record_success();
            }
            Err(err) => {
                let remaining = run.remaining() - 1;
                tracing::warn!(
                    pharmacy = %edit.pharmacy,
                    medicine = %edit.medicine,
                    error = %err,
                    not_attempted = remaining,
                    "stock batch aborted"
                );
                return run.abort(err.to_string());
            }
        }
    }

    let report = run.finish();
    tracing::info!(applied = report.applied.len(), "stock batch complete");
    report
}
