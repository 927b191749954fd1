use serde::{Deserialize, Serialize};

use pharmasync_core::{MedicineName, PharmacyName};

/// One line item of a pharmacy's inventory, as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRecord {
    pub medicine: MedicineName,
    pub stock: u32,
    /// Standing demand; older backends omit it.
    #[serde(default)]
    pub subscriptions: u32,
}

impl MedicineRecord {
    pub fn new(medicine: impl Into<MedicineName>, stock: u32) -> Self {
        Self {
            medicine: medicine.into(),
            stock,
            subscriptions: 0,
        }
    }

    pub fn with_subscriptions(mut self, subscriptions: u32) -> Self {
        self.subscriptions = subscriptions;
        self
    }
}

/// A pharmacy and its ordered inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyRecord {
    pub name: PharmacyName,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub inventory: Vec<MedicineRecord>,
}

impl PharmacyRecord {
    pub fn new(name: impl Into<PharmacyName>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            inventory: Vec::new(),
        }
    }

    pub fn with_inventory(mut self, inventory: Vec<MedicineRecord>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn find(&self, medicine: &str) -> Option<&MedicineRecord> {
        self.inventory.iter().find(|m| m.medicine.as_str() == medicine)
    }
}

/// One row of a medicine search: a pharmacy that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub pharmacy: PharmacyName,
    pub stock: u32,
    #[serde(default)]
    pub address: String,
}

/// A pending replacement of one medicine's stock at one pharmacy.
///
/// Serializes to the `/update_stock` request body (`new_stock` goes on the
/// wire as `stock`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEdit {
    pub pharmacy: PharmacyName,
    pub medicine: MedicineName,
    #[serde(rename = "stock")]
    pub new_stock: u32,
}

impl StockEdit {
    pub fn new(
        pharmacy: impl Into<PharmacyName>,
        medicine: impl Into<MedicineName>,
        new_stock: u32,
    ) -> Self {
        Self {
            pharmacy: pharmacy.into(),
            medicine: medicine.into(),
            new_stock,
        }
    }
}
