//! HTTP implementation of [`InventoryBackend`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use pharmasync_core::{MedicineName, PharmacyName};
use pharmasync_inventory::{PharmacyRecord, SearchHit, StockEdit};

use crate::backend::InventoryBackend;
use crate::config::BackendConfig;
use crate::error::ClientError;

/// Client for the inventory backend's JSON API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: Url,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    medicine: &'a str,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.uri)
            .map_err(|e| ClientError::Transport(format!("invalid backend uri '{}': {}", config.uri, e)))?;

        if base.cannot_be_a_base() {
            return Err(ClientError::Transport(format!(
                "backend uri '{}' cannot be used as a base",
                config.uri
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self { base, client })
    }

    pub fn base_uri(&self) -> &str {
        self.base.as_str()
    }

    /// Build an endpoint URL; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Transport(format!("cannot extend backend uri {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            return Err(ClientError::Api {
                status,
                body: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");

        self.send(self.client.get(url))
            .await?
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait]
impl InventoryBackend for HttpBackend {
    async fn list_pharmacies(&self) -> Result<Vec<PharmacyRecord>, ClientError> {
        self.get_json(&["pharmacies"]).await
    }

    async fn get_pharmacy(&self, name: &PharmacyName) -> Result<PharmacyRecord, ClientError> {
        self.get_json(&["pharmacy", name.as_str()]).await
    }

    async fn list_medicines(&self) -> Result<Vec<MedicineName>, ClientError> {
        self.get_json(&["medicines"]).await
    }

    async fn search(&self, medicine: &MedicineName) -> Result<Vec<SearchHit>, ClientError> {
        let url = self.endpoint(&["search"])?;
        tracing::debug!(%url, %medicine, "POST search");

        let body = SearchRequest {
            medicine: medicine.as_str(),
        };

        self.send(self.client.post(url).json(&body))
            .await?
            .json::<Vec<SearchHit>>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn update_stock(&self, edit: &StockEdit) -> Result<(), ClientError> {
        let url = self.endpoint(&["update_stock"])?;
        tracing::debug!(
            %url,
            pharmacy = %edit.pharmacy,
            medicine = %edit.medicine,
            stock = edit.new_stock,
            "POST update_stock"
        );

        self.send(self.client.post(url).json(edit)).await?;
        Ok(())
    }
}
