//! `pharmasync` command-line entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use pharmasync_client::Session;
use pharmasync_dashboard::{Cli, Outcome, execute};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    pharmasync_observability::init(cli.log_format);

    match run(cli).await {
        Ok(outcome) => {
            print!("{}", outcome.text);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config = cli
        .client_config(Path::new("."), |key| std::env::var(key).ok())
        .context("failed to load configuration")?;

    let session = Session::connect(&config).context("failed to set up backend client")?;
    execute(&session, cli.command).await
}
