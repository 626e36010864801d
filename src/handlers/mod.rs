//! Command handlers
//!
//! Run the selected mode against a client and write the results

pub mod health;
pub mod report;

use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::{Mode, Settings};
use crate::services::DeepSeekClient;

pub use health::health_check;
pub use report::run_reports;

/// Result of a run that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Unhealthy,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Unhealthy => ExitCode::FAILURE,
        }
    }
}

/// Run the mode selected in `settings`.
///
/// Reports go to `out`; warnings go to `diag`.
pub async fn run<W, E>(
    settings: &Settings,
    client: &DeepSeekClient,
    out: &mut W,
    diag: &mut E,
) -> Result<Outcome>
where
    W: Write,
    E: Write,
{
    match settings.mode {
        Mode::Health => health_check(settings, client, out).await,
        Mode::Report(reports) => {
            run_reports(settings, reports, client, out, diag).await?;
            Ok(Outcome::Success)
        }
    }
}

/// Run against the process stdout and stderr.
///
/// The streams are locked per write, never across an await, so log events
/// emitted on runtime worker threads can still reach stderr.
pub async fn run_stdio(settings: &Settings, client: &DeepSeekClient) -> Result<Outcome> {
    let mut out = io::stdout();
    let mut diag = io::stderr();
    run(settings, client, &mut out, &mut diag).await
}
