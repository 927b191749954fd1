//! Diff-based update protocol.
//!
//! An editing session starts from a snapshot of one pharmacy's inventory and
//! ends with the same rows, possibly with different stock values. Only rows
//! whose stock actually changed turn into [`StockEdit`]s.

use pharmasync_core::{DomainError, DomainResult, PharmacyName};

use crate::record::{MedicineRecord, StockEdit};

/// Compute the minimal, order-preserving list of edits turning `original` into
/// `edited`.
///
/// `edited` must contain the same medicines, in the same order, as `original`;
/// anything else is a caller bug and is rejected with
/// [`DomainError::Validation`] before any edit is produced.
pub fn reconcile(
    pharmacy: &PharmacyName,
    original: &[MedicineRecord],
    edited: &[MedicineRecord],
) -> DomainResult<Vec<StockEdit>> {
    if original.len() != edited.len() {
        return Err(DomainError::validation(format!(
            "edited snapshot for {} has {} rows, original has {}",
            pharmacy,
            edited.len(),
            original.len()
        )));
    }

    if let Some((idx, (o, e))) = original
        .iter()
        .zip(edited)
        .enumerate()
        .find(|(_, (o, e))| o.medicine != e.medicine)
    {
        return Err(DomainError::validation(format!(
            "row {} of {} changed medicine from {} to {}",
            idx, pharmacy, o.medicine, e.medicine
        )));
    }

    Ok(original
        .iter()
        .zip(edited)
        .filter(|(o, e)| o.stock != e.stock)
        .map(|(o, e)| StockEdit {
            pharmacy: pharmacy.clone(),
            medicine: o.medicine.clone(),
            new_stock: e.stock,
        })
        .collect())
}

/// Return a copy of `original` with each edit's new stock applied.
///
/// Later edits to the same medicine win. Medicines are matched ignoring
/// surrounding whitespace and the snapshot keeps its own spelling. An edit
/// naming a medicine that is not in the snapshot is rejected.
pub fn apply_edits(
    original: &[MedicineRecord],
    edits: &[StockEdit],
) -> DomainResult<Vec<MedicineRecord>> {
    let mut out = original.to_vec();

    for edit in edits {
        let row = out
            .iter_mut()
            .find(|m| m.medicine.matches(edit.medicine.as_str()))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "{} does not stock {}",
                    edit.pharmacy, edit.medicine
                ))
            })?;
        row.stock = edit.new_stock;
    }

    Ok(out)
}
