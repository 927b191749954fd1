//! Stock-status classification.
//!
//! A single policy decides how a medicine's stock is displayed:
//!
//! 1. `stock == 0` is [`StatusLevel::Critical`] ("Out of Stock")
//! 2. `stock < threshold` is [`StatusLevel::Warning`] ("Low (stock < threshold)")
//! 3. anything else is [`StatusLevel::Ok`] ("Sufficient")
//!
//! The threshold comes from a [`LowStockRule`]: either the medicine's own
//! subscription count (the default) or a fixed constant. The fixed rule exists
//! only to reproduce older dashboards that flagged anything under 10 units.

use serde::{Deserialize, Serialize};

use crate::record::MedicineRecord;

/// Display severity of a medicine's stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusLevel {
    Critical,
    Warning,
    Ok,
}

impl StatusLevel {
    /// Traffic-light marker shown next to the medicine.
    pub fn marker(&self) -> &'static str {
        match self {
            StatusLevel::Critical => "🔴",
            StatusLevel::Warning => "🟡",
            StatusLevel::Ok => "🟢",
        }
    }
}

/// Classification result: level plus the human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStatus {
    pub level: StatusLevel,
    pub label: String,
}

/// Which threshold turns positive stock into a warning.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowStockRule {
    /// Warn when stock cannot cover the standing subscriptions.
    #[default]
    Subscriptions,
    /// Warn below a fixed unit count, ignoring subscriptions.
    ///
    /// Legacy behaviour; prefer [`LowStockRule::Subscriptions`].
    Fixed(u32),
}

impl LowStockRule {
    /// Threshold the legacy pharmacy view used.
    pub const LEGACY_FIXED_THRESHOLD: u32 = 10;

    pub fn legacy() -> Self {
        LowStockRule::Fixed(Self::LEGACY_FIXED_THRESHOLD)
    }

    pub fn threshold(&self, subscriptions: u32) -> u32 {
        match self {
            LowStockRule::Subscriptions => subscriptions,
            LowStockRule::Fixed(threshold) => *threshold,
        }
    }

    pub fn classify(&self, stock: u32, subscriptions: u32) -> StockStatus {
        let threshold = self.threshold(subscriptions);

        if stock == 0 {
            StockStatus {
                level: StatusLevel::Critical,
                label: "Out of Stock".to_string(),
            }
        } else if stock < threshold {
            StockStatus {
                level: StatusLevel::Warning,
                label: format!("Low ({} < {})", stock, threshold),
            }
        } else {
            StockStatus {
                level: StatusLevel::Ok,
                label: "Sufficient".to_string(),
            }
        }
    }

    pub fn classify_record(&self, record: &MedicineRecord) -> StockStatus {
        self.classify(record.stock, record.subscriptions)
    }
}

/// Classify with the canonical subscriptions-relative rule.
pub fn classify(stock: u32, subscriptions: u32) -> StockStatus {
    LowStockRule::Subscriptions.classify(stock, subscriptions)
}
