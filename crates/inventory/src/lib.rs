//! Inventory domain module.
//!
//! This crate contains the decision logic of the dashboards, implemented purely
//! as deterministic functions over backend snapshots (no IO, no HTTP, no
//! storage):
//!
//! - [`status`]: stock-status classification under a configurable low-stock rule
//! - [`reconcile`]: diffing an edited snapshot into the minimal set of stock edits
//! - [`aggregate`]: per-medicine totals across pharmacies (Overview)
//! - [`batch`]: sequential batch submission with abort-on-first-failure

pub mod aggregate;
pub mod batch;
pub mod reconcile;
pub mod record;
pub mod status;

pub use aggregate::{StockTotals, aggregate};
pub use batch::{BatchFailure, BatchReport, BatchRun, UpdateBatchError};
pub use reconcile::{apply_edits, reconcile};
pub use record::{MedicineRecord, PharmacyRecord, SearchHit, StockEdit};
pub use status::{LowStockRule, StatusLevel, StockStatus, classify};
