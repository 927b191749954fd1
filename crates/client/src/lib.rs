//! `pharmasync-client`
//!
//! **Responsibility:** talk to the pharmacy inventory backend.
//!
//! This crate provides:
//! - Explicit configuration (backend URI, timeout, low-stock rule)
//! - A typed HTTP client for the backend's five endpoints
//! - Read recovery: failed reads become a warning plus an empty result
//! - Sequential batch submission that stops at the first failed edit
//!
//! The backend remains the only authority over pharmacy data; nothing here is
//! persisted or cached between sessions.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod recover;
pub mod session;
pub mod submit;

pub use backend::InventoryBackend;
pub use config::{
    BACKEND_URI_ENV, BackendConfig, CONFIG_PATH_ENV, ClientConfig, ConfigError, StatusConfig,
};
pub use error::ClientError;
pub use http::HttpBackend;
pub use recover::Recovered;
pub use session::Session;
pub use submit::submit_batch;
