//! DeepSeek Balance Checker
//!
//! Command-line tool that checks DeepSeek API account balance, models,
//! usage and health

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use dsbc::cli::Args;
use dsbc::handlers::{self, Outcome};
use dsbc::utils::logging::init_logging;
use dsbc::{resolve_token, DeepSeekClient, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<Outcome> {
    let settings = Settings::load(&args).context("Invalid configuration")?;

    // Initialize logging
    init_logging(&settings.logging);
    debug!("{}", dsbc::version_info());

    let resolved = resolve_token(settings.token.as_deref())?;
    if let Some(notice) = resolved.advisory() {
        eprintln!("{}", notice);
    }

    let client = DeepSeekClient::new(resolved.into_token());

    handlers::run_stdio(&settings, &client).await
}
