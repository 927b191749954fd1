//! Plain-text renderers for each view.
//!
//! Renderers are pure: they take already-fetched data and return the text to
//! print, so every view can be checked without a terminal or a backend.

use std::fmt::Write;

use pharmasync_core::MedicineName;
use pharmasync_inventory::{
    BatchReport, LowStockRule, PharmacyRecord, SearchHit, StockTotals,
};

/// Cells per row in the pharmacy grid.
const GRID_COLUMNS: usize = 3;

pub fn warning(message: &str) -> String {
    format!("❌ {}\n", message)
}

/// One pharmacy: header line, then its inventory as a grid.
pub fn pharmacy(record: &PharmacyRecord, rule: LowStockRule) -> String {
    let mut out = format!("### {} - {}\n", record.name, record.address);

    if record.inventory.is_empty() {
        out.push_str("(no medicines listed)\n");
        return out;
    }

    let cells: Vec<String> = record
        .inventory
        .iter()
        .map(|m| {
            let status = rule.classify_record(m);
            format!(
                "{} {} — {} ({})",
                status.level.marker(),
                m.medicine,
                m.stock,
                status.label
            )
        })
        .collect();

    let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);

    for row in cells.chunks(GRID_COLUMNS) {
        let line = row
            .iter()
            .map(|cell| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

pub fn pharmacies(records: &[PharmacyRecord], rule: LowStockRule) -> String {
    if records.is_empty() {
        return "No pharmacies found.\n".to_string();
    }

    records
        .iter()
        .map(|p| pharmacy(p, rule))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn medicines(names: &[MedicineName]) -> String {
    if names.is_empty() {
        return "No medicines available.\n".to_string();
    }

    let mut out = String::from("Available medicines:\n");
    for name in names {
        let _ = writeln!(out, "- {}", name);
    }
    out
}

pub fn search(medicine: &MedicineName, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No pharmacies have this medicine in stock.\n".to_string();
    }

    let mut out = format!("Pharmacies stocking {}:\n", medicine);
    for hit in hits {
        let _ = writeln!(
            out,
            "🏥 {} — Stock: {} | 📍 {}",
            hit.pharmacy, hit.stock, hit.address
        );
    }
    out
}

/// Totals table, alphabetical by medicine.
pub fn overview(totals: &StockTotals) -> String {
    if totals.is_empty() {
        return "No stock recorded.\n".to_string();
    }

    let mut rows: Vec<(&MedicineName, u64)> = totals.iter().map(|(m, t)| (m, *t)).collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let width = rows
        .iter()
        .map(|(m, _)| m.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("Medicine".len());

    let mut out = format!("{:<width$}  Total\n", "Medicine", width = width);
    for (medicine, total) in rows {
        let _ = writeln!(out, "{:<width$}  {}", medicine.as_str(), total, width = width);
    }
    out
}

/// Per-edit outcome of a submitted batch.
pub fn batch(report: &BatchReport) -> String {
    let mut out = String::new();

    for edit in &report.applied {
        let _ = writeln!(
            out,
            "✅ Updated {} at {} to {}",
            edit.medicine, edit.pharmacy, edit.new_stock
        );
    }

    if let Some(failure) = &report.failure {
        let _ = writeln!(
            out,
            "❌ failed to update {}: {}",
            failure.edit.medicine, failure.reason
        );
    }

    for edit in &report.not_attempted {
        let _ = writeln!(
            out,
            "⏭ Not attempted: {} → {}",
            edit.medicine, edit.new_stock
        );
    }

    out
}
