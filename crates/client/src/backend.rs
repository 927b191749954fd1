//! Backend abstraction used by the session and batch driver.

use async_trait::async_trait;

use pharmasync_core::{MedicineName, PharmacyName};
use pharmasync_inventory::{PharmacyRecord, SearchHit, StockEdit};

use crate::error::ClientError;

/// Operations the inventory backend exposes.
///
/// [`crate::HttpBackend`] is the production implementation; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    /// `GET /pharmacies`
    async fn list_pharmacies(&self) -> Result<Vec<PharmacyRecord>, ClientError>;

    /// `GET /pharmacy/{name}`
    async fn get_pharmacy(&self, name: &PharmacyName) -> Result<PharmacyRecord, ClientError>;

    /// `GET /medicines`
    async fn list_medicines(&self) -> Result<Vec<MedicineName>, ClientError>;

    /// `POST /search`
    async fn search(&self, medicine: &MedicineName) -> Result<Vec<SearchHit>, ClientError>;

    /// `POST /update_stock`; any non-success status is an error.
    async fn update_stock(&self, edit: &StockEdit) -> Result<(), ClientError>;
}
