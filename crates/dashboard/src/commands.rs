//! View and action handlers.

use anyhow::Context;

use pharmasync_client::{InventoryBackend, Session};
use pharmasync_core::{MedicineName, PharmacyName};

use crate::cli::Command;
use crate::render;

/// What a command produced: text for stdout and whether it fully succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub success: bool,
}

impl Outcome {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn with_warning(mut self, warning: Option<&str>) -> Self {
        if let Some(w) = warning {
            self.text.insert_str(0, &render::warning(w));
        }
        self
    }
}

/// Run one command against the session.
///
/// Failed reads render as a warning plus the view's empty state. Only
/// invalid edits surface as `Err`.
pub async fn execute<B: InventoryBackend>(
    session: &Session<B>,
    command: Command,
) -> anyhow::Result<Outcome> {
    match command {
        Command::Pharmacy { name: None } => {
            tracing::info!("loading pharmacy view");
            let pharmacies = session.pharmacies().await;
            Ok(Outcome::ok(render::pharmacies(&pharmacies.value, session.rule()))
                .with_warning(pharmacies.warning.as_deref()))
        }
        Command::Pharmacy { name: Some(name) } => {
            tracing::info!(pharmacy = %name, "loading pharmacy view");
            let one = session.pharmacy(&name).await;
            let records: Vec<_> = one.value.into_iter().collect();
            Ok(Outcome::ok(render::pharmacies(&records, session.rule()))
                .with_warning(one.warning.as_deref()))
        }
        Command::Edit { pharmacy, set } => edit(session, pharmacy, set).await,
        Command::Medicines => {
            let names = session.medicines().await;
            Ok(Outcome::ok(render::medicines(&names.value)).with_warning(names.warning.as_deref()))
        }
        Command::Search { medicine } => {
            tracing::info!(%medicine, "searching");
            let hits = session.search(&medicine).await;
            Ok(Outcome::ok(render::search(&medicine, &hits.value))
                .with_warning(hits.warning.as_deref()))
        }
        Command::Overview => {
            tracing::info!("loading overview");
            let totals = session.overview().await;
            Ok(Outcome::ok(render::overview(&totals.value)).with_warning(totals.warning.as_deref()))
        }
    }
}

async fn edit<B: InventoryBackend>(
    session: &Session<B>,
    pharmacy: PharmacyName,
    set: Vec<(MedicineName, u32)>,
) -> anyhow::Result<Outcome> {
    let loaded = session.pharmacy(&pharmacy).await;
    let Some(record) = loaded.value else {
        let mut text = render::warning(loaded.warning.as_deref().unwrap_or("pharmacy not found"));
        text.push_str("Nothing to edit.\n");
        return Ok(Outcome {
            text,
            success: false,
        });
    };

    let edits = session
        .plan_edits(&record, &set)
        .with_context(|| format!("invalid edit for {}", pharmacy))?;

    if edits.is_empty() {
        return Ok(Outcome::ok("No changes to submit.\n".to_string()));
    }

    let report = session.submit(edits).await;
    let success = report.is_success();
    let mut text = render::batch(&report);

    // Re-render from the backend so the view reflects what actually stuck.
    let refreshed = session.pharmacy(&pharmacy).await;
    if let Some(current) = &refreshed.value {
        text.push('\n');
        text.push_str(&render::pharmacy(current, session.rule()));
    } else if let Some(w) = refreshed.warning.as_deref() {
        text.push_str(&render::warning(w));
    }

    Ok(Outcome { text, success })
}
