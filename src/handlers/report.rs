//! Balance, models and usage reports

use anyhow::Result;
use std::io::Write;

use crate::config::{Reports, Settings};
use crate::services::DeepSeekClient;
use crate::utils::format::{format_balance, format_models, format_usage};

/// Print the selected reports in the order verbose preamble, models, usage, balance.
///
/// The first failing request aborts the run.
pub async fn run_reports<W, E>(
    settings: &Settings,
    reports: Reports,
    client: &DeepSeekClient,
    out: &mut W,
    diag: &mut E,
) -> Result<()>
where
    W: Write,
    E: Write,
{
    if settings.verbose {
        writeln!(out, "Using API token: {}", client.config().token().masked())?;
        let healthy = client.check_health().await;
        writeln!(
            out,
            "API Health: {}",
            if healthy { "✅ Healthy" } else { "❌ Unhealthy" }
        )?;
        if !healthy {
            writeln!(diag, "Warning: API may not be accessible")?;
        }
    }

    // JSON output passes the upstream bodies through untouched
    if reports.models {
        if settings.is_json() {
            let body = client.get_models_json().await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        } else {
            let models = client.get_models().await?;
            writeln!(out, "{}", format_models(&models))?;
        }
    }

    if reports.usage {
        let usage = client.get_usage(&settings.usage_query).await?;
        if settings.is_json() {
            writeln!(out, "{}", serde_json::to_string_pretty(&usage)?)?;
        } else {
            writeln!(out, "{}", format_usage(&usage, &settings.usage_query))?;
        }
    }

    if reports.balance {
        if settings.is_json() {
            let body = client.get_balance_json().await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        } else {
            let balance = client.get_balance().await?;
            writeln!(out, "{}", format_balance(&balance))?;
        }
    }

    Ok(())
}
