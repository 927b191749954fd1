//! Overview aggregation: total stock per medicine across pharmacies.

use std::collections::HashMap;

use pharmasync_core::MedicineName;

use crate::record::PharmacyRecord;

/// Total stock per medicine. Iteration order carries no meaning.
pub type StockTotals = HashMap<MedicineName, u64>;

/// Sum stock per medicine name over every pharmacy's inventory.
///
/// Medicines seen anywhere are present even when their total is zero.
pub fn aggregate(pharmacies: &[PharmacyRecord]) -> StockTotals {
    let mut totals = StockTotals::new();

    for pharmacy in pharmacies {
        for record in &pharmacy.inventory {
            *totals.entry(record.medicine.clone()).or_insert(0) += u64::from(record.stock);
        }
    }

    totals
}
