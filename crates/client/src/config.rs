//! Client configuration.
//!
//! Loaded from a TOML file laid out like the backend secrets file:
//!
//! ```toml
//! [backend]
//! uri = "http://localhost:5000"
//! timeout_secs = 5
//!
//! [status]
//! low_stock_rule = "subscriptions"   # or { fixed = 10 }
//! ```
//!
//! The resulting [`ClientConfig`] is handed explicitly to whatever needs it;
//! there is no process-global lookup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pharmasync_inventory::LowStockRule;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "PHARMASYNC_CONFIG";

/// Environment variable overriding `backend.uri`.
pub const BACKEND_URI_ENV: &str = "PHARMASYNC_BACKEND_URI";

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pharmasync.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URI, scheme included (e.g. `http://localhost:5000`).
    #[serde(default = "default_uri")]
    pub uri: String,
    /// Per-request timeout in seconds (default: 5).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Stock status display policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusConfig {
    #[serde(default)]
    pub low_stock_rule: LowStockRule,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_uri() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl ClientConfig {
    /// Read the config file and apply environment overrides.
    ///
    /// - An explicit `path` must exist and parse.
    /// - Without one, `dir/pharmasync.toml` is used if present, else defaults.
    /// - `PHARMASYNC_BACKEND_URI` (read through `lookup`) then overrides the
    ///   backend URI.
    ///
    /// Nothing is validated here so that callers can layer further overrides
    /// on top before calling [`ClientConfig::validated`].
    pub fn load_from(
        path: Option<&Path>,
        dir: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = dir.join(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(&fallback)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(config.with_env_overrides(lookup))
    }

    /// Parse a config file without applying overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(uri) = lookup(BACKEND_URI_ENV).filter(|v| !v.trim().is_empty()) {
            self.backend.uri = uri;
        }
        self
    }

    /// Replace the backend URI (e.g. from a command-line flag).
    pub fn with_backend_uri(mut self, uri: impl Into<String>) -> Self {
        self.backend.uri = uri.into();
        self
    }

    /// Normalize and validate.
    ///
    /// Checks:
    /// - The URI is non-empty and uses `http://` or `https://`
    /// - The timeout is positive
    /// - A fixed low-stock threshold is positive
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.backend.uri = self.backend.uri.trim().trim_end_matches('/').to_string();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let uri = &self.backend.uri;
        if uri.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "backend.uri must not be empty".to_string(),
            });
        }
        if !(uri.starts_with("http://") || uri.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("backend.uri '{}' must start with http:// or https://", uri),
            });
        }

        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "backend.timeout_secs must be greater than zero".to_string(),
            });
        }

        if self.status.low_stock_rule == LowStockRule::Fixed(0) {
            return Err(ConfigError::ValidationError {
                message: "status.low_stock_rule fixed threshold must be greater than zero"
                    .to_string(),
            });
        }

        Ok(())
    }
}
