//! One dashboard session: reads with recovery, edit planning, batch submit.
//!
//! A session holds configuration and a backend handle only. Records fetched
//! through it are returned to the caller and never retained.

use pharmasync_core::{DomainResult, MedicineName, PharmacyName};
use pharmasync_inventory::{
    BatchReport, LowStockRule, PharmacyRecord, SearchHit, StockEdit, StockTotals, aggregate,
    apply_edits, reconcile,
};

use crate::backend::InventoryBackend;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpBackend;
use crate::recover::Recovered;
use crate::submit::submit_batch;

pub struct Session<B> {
    backend: B,
    rule: LowStockRule,
}

impl Session<HttpBackend> {
    /// Build a session talking HTTP to the configured backend.
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let backend = HttpBackend::new(&config.backend)?;
        tracing::info!(backend = %backend.base_uri(), rule = ?config.status.low_stock_rule, "session ready");
        Ok(Self::new(backend, config.status.low_stock_rule))
    }
}

impl<B: InventoryBackend> Session<B> {
    pub fn new(backend: B, rule: LowStockRule) -> Self {
        Self { backend, rule }
    }

    pub fn rule(&self) -> LowStockRule {
        self.rule
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn pharmacies(&self) -> Recovered<Vec<PharmacyRecord>> {
        Recovered::from_result(self.backend.list_pharmacies().await, "pharmacies")
    }

    pub async fn pharmacy(&self, name: &PharmacyName) -> Recovered<Option<PharmacyRecord>> {
        let what = format!("pharmacy '{}'", name);
        Recovered::from_result(self.backend.get_pharmacy(name).await.map(Some), &what)
    }

    pub async fn medicines(&self) -> Recovered<Vec<MedicineName>> {
        Recovered::from_result(self.backend.list_medicines().await, "medicines")
    }

    pub async fn search(&self, medicine: &MedicineName) -> Recovered<Vec<SearchHit>> {
        let what = format!("search results for '{}'", medicine);
        Recovered::from_result(self.backend.search(medicine).await, &what)
    }

    /// Total stock per medicine across every pharmacy.
    pub async fn overview(&self) -> Recovered<StockTotals> {
        self.pharmacies().await.map(|pharmacies| aggregate(&pharmacies))
    }

    /// Turn user-entered `medicine -> stock` values into the minimal batch of
    /// edits against `pharmacy`'s current inventory.
    ///
    /// Values equal to the current stock produce no edit. Naming a medicine
    /// the pharmacy does not stock is a validation error.
    pub fn plan_edits(
        &self,
        pharmacy: &PharmacyRecord,
        changes: &[(MedicineName, u32)],
    ) -> DomainResult<Vec<StockEdit>> {
        let requested: Vec<StockEdit> = changes
            .iter()
            .map(|(medicine, stock)| StockEdit {
                pharmacy: pharmacy.name.clone(),
                medicine: medicine.clone(),
                new_stock: *stock,
            })
            .collect();

        let edited = apply_edits(&pharmacy.inventory, &requested)?;
        reconcile(&pharmacy.name, &pharmacy.inventory, &edited)
    }

    pub async fn submit(&self, edits: Vec<StockEdit>) -> BatchReport {
        submit_batch(&self.backend, edits).await
    }
}
