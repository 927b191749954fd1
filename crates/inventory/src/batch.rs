//! Sequential batch submission.
//!
//! Edits from one session are sent one at a time, in order. The first failure
//! stops the batch: later edits are never sent and earlier ones stay applied
//! (there is no rollback). [`BatchRun`] tracks that progression without doing
//! any IO itself; callers drive it with whatever transport they have.

use std::collections::VecDeque;

use thiserror::Error;

use pharmasync_core::MedicineName;

use crate::record::StockEdit;

/// The edit that stopped a batch and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub edit: StockEdit,
    pub reason: String,
}

/// Outcome of one batch: applied edits, the failing edit (if any), and the
/// edits that were never attempted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub applied: Vec<StockEdit>,
    pub failure: Option<BatchFailure>,
    pub not_attempted: Vec<StockEdit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to update {medicine}: {reason}")]
pub struct UpdateBatchError {
    pub medicine: MedicineName,
    pub reason: String,
    /// Edits that had already been applied when the batch stopped.
    pub applied: Vec<StockEdit>,
    pub not_attempted: Vec<StockEdit>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.failure.is_none() && self.not_attempted.is_empty()
    }

    /// Collapse the report: the applied edits on success, an
    /// [`UpdateBatchError`] naming the failing medicine otherwise.
    pub fn into_result(self) -> Result<Vec<StockEdit>, UpdateBatchError> {
        match self.failure {
            None => Ok(self.applied),
            Some(failure) => Err(UpdateBatchError {
                medicine: failure.edit.medicine,
                reason: failure.reason,
                applied: self.applied,
                not_attempted: self.not_attempted,
            }),
        }
    }
}

/// In-progress batch.
#[derive(Debug, Clone)]
pub struct BatchRun {
    pending: VecDeque<StockEdit>,
    applied: Vec<StockEdit>,
}

impl BatchRun {
    pub fn new(edits: impl IntoIterator<Item = StockEdit>) -> Self {
        Self {
            pending: edits.into_iter().collect(),
            applied: Vec::new(),
        }
    }

    /// The edit to send next, or `None` when the batch is exhausted.
    pub fn next_edit(&self) -> Option<&StockEdit> {
        self.pending.front()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Mark the current edit as applied by the backend.
    pub fn record_success(&mut self) {
        if let Some(edit) = self.pending.pop_front() {
            self.applied.push(edit);
        }
    }

    /// Stop at the current edit. Everything after it is reported as not
    /// attempted.
    pub fn abort(mut self, reason: impl Into<String>) -> BatchReport {
        let failure = self.pending.pop_front().map(|edit| BatchFailure {
            edit,
            reason: reason.into(),
        });

        BatchReport {
            applied: self.applied,
            failure,
            not_attempted: self.pending.into_iter().collect(),
        }
    }

    /// Finish the run. Edits never confirmed are reported as not attempted.
    pub fn finish(self) -> BatchReport {
        BatchReport {
            applied: self.applied,
            failure: None,
            not_attempted: self.pending.into_iter().collect(),
        }
    }
}
