//! Command-line surface.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use pharmasync_client::{ClientConfig, ConfigError};
use pharmasync_core::{MedicineName, PharmacyName};
use pharmasync_observability::LogFormat;

/// Pharmacy inventory dashboards.
#[derive(Debug, Parser)]
#[command(name = "pharmasync", about = "Pharmacy inventory dashboards", version)]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(long, env = "PHARMASYNC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URI; overrides the config file and environment.
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Log line format on stderr: text or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Resolve the client configuration.
    ///
    /// Precedence, lowest first: defaults, the config file (`--config`, else
    /// `dir/pharmasync.toml`), `PHARMASYNC_BACKEND_URI`, then `--backend`.
    /// Validation runs once, after every override.
    pub fn client_config(
        &self,
        dir: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ClientConfig, ConfigError> {
        let mut config = ClientConfig::load_from(self.config.as_deref(), dir, lookup)?;
        if let Some(uri) = &self.backend {
            config = config.with_backend_uri(uri.clone());
        }
        config.validated()
    }
}

/// Available views and actions.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Pharmacy view: stock per pharmacy with status markers.
    Pharmacy {
        /// Show only this pharmacy.
        #[arg(short, long)]
        name: Option<PharmacyName>,
    },

    /// Edit stock levels of one pharmacy.
    Edit {
        /// Pharmacy to edit.
        #[arg(short, long)]
        pharmacy: PharmacyName,

        /// New stock value, as MEDICINE=STOCK. Repeatable.
        #[arg(short, long = "set", value_name = "MEDICINE=STOCK", value_parser = parse_assignment, required = true)]
        set: Vec<(MedicineName, u32)>,
    },

    /// Customer view: list medicine names.
    Medicines,

    /// Customer view: which pharmacies have a medicine in stock.
    Search {
        medicine: MedicineName,
    },

    /// Overview: total stock per medicine across all pharmacies.
    Overview,
}

/// Parse `MEDICINE=STOCK`. The last `=` separates the value so medicine names
/// may themselves contain `=`.
pub fn parse_assignment(s: &str) -> Result<(MedicineName, u32), String> {
    let (medicine, stock) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected MEDICINE=STOCK, got '{}'", s))?;

    let medicine: MedicineName = medicine.parse().map_err(|e| format!("{}", e))?;
    let stock: u32 = stock
        .trim()
        .parse()
        .map_err(|_| format!("stock for {} must be a non-negative integer, got '{}'", medicine, stock.trim()))?;

    Ok((medicine, stock))
}
