//! Health check handler

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

use super::Outcome;
use crate::config::Settings;
use crate::services::DeepSeekClient;
use crate::utils::format::format_health;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
}

/// Probe the API and report the verdict; unhealthy maps to a failing exit code
pub async fn health_check<W: Write>(
    settings: &Settings,
    client: &DeepSeekClient,
    out: &mut W,
) -> Result<Outcome> {
    debug!("Executing health check");

    let healthy = client.check_health().await;

    if settings.is_json() {
        let body = serde_json::to_string_pretty(&HealthResponse { healthy })?;
        writeln!(out, "{}", body)?;
    } else {
        writeln!(out, "{}", format_health(healthy))?;
    }

    Ok(if healthy {
        Outcome::Success
    } else {
        Outcome::Unhealthy
    })
}
