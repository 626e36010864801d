//! Application configuration settings
//!
//! Turns parsed command-line arguments and the environment into the
//! resolved configuration the handlers run against

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::models::UsageQuery;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// Token given on the command line, if any
    pub token: Option<String>,
    /// What to run
    pub mode: Mode,
    /// Output format
    pub format: OutputFormat,
    /// Print token preview and health before the reports
    pub verbose: bool,
    /// Date range for the usage report
    pub usage_query: UsageQuery,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// What the invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Health check only; the exit code carries the result
    Health,
    /// One or more reports, printed in the order models, usage, balance
    Report(Reports),
}

/// Reports selected for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reports {
    pub balance: bool,
    pub models: bool,
    pub usage: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG` and `LOG_FORMAT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: get_env_or_default("RUST_LOG", &defaults.level),
            format: get_env_or_default("LOG_FORMAT", &defaults.format),
        }
    }
}

impl Settings {
    /// Load `.env` if present, then build settings from the arguments
    pub fn load(args: &Args) -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_args(args)
    }

    /// Build settings from the arguments and logging variables
    pub fn from_args(args: &Args) -> Result<Self> {
        let mode = if args.health {
            Mode::Health
        } else {
            Mode::Report(Reports {
                balance: !(args.models || args.usage) || args.verbose,
                models: args.models,
                usage: args.usage,
            })
        };

        let settings = Self {
            token: args.token.clone(),
            mode,
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbose: args.verbose,
            usage_query: UsageQuery::new(args.start_date, args.end_date),
            logging: LoggingConfig::from_env(),
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.usage_query.start_date, self.usage_query.end_date) {
            if start > end {
                anyhow::bail!("Start date {} is after end date {}", start, end);
            }
        }

        // Validate log level; filter directives such as `dsbc=debug` pass through
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        let level = self.logging.level.to_lowercase();
        if !valid_levels.contains(&level.as_str()) && !level.contains('=') {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
