//! CLI definitions: argument parsing and help text.

use chrono::NaiveDate;
use clap::Parser;

use crate::models::usage::DATE_FORMAT;

const AFTER_HELP: &str = "\
EXAMPLES:
  dsbc                                   Use DEEPSEEK_API_TOKEN environment variable
  dsbc --token sk-abc123                 Use provided token
  dsbc --models                          Show available models
  dsbc --usage --start-date 2024-01-01   Show usage since a date
  dsbc --verbose                         Show detailed information
  dsbc --json                            Output in JSON format
  dsbc --health                          Exit 0 if the API is reachable, 1 otherwise

ENVIRONMENT VARIABLES:
  DEEPSEEK_API_TOKEN   Default API token
  DEEPSEEK_TOKEN       Alternative token variable
  DEEPSEEK_API_KEY     Alternative token variable
  OPENAI_API_KEY       Alternative token variable
  RUST_LOG             Log level written to stderr (default: warn)
  LOG_FORMAT           Log format: text or json
";

/// Command-line arguments for the application.
#[derive(Parser, Debug, Default)]
#[command(
    name = "dsbc",
    author,
    version,
    about = "Check DeepSeek API account balance and available models",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// DeepSeek API token (default: from DEEPSEEK_API_TOKEN env var)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Show available models and pricing
    #[arg(short = 'm', long)]
    pub models: bool,

    /// Show usage statistics
    #[arg(short = 'u', long)]
    pub usage: bool,

    /// First day of the usage range
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date, requires = "usage")]
    pub start_date: Option<NaiveDate>,

    /// Last day of the usage range
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date, requires = "usage")]
    pub end_date: Option<NaiveDate>,

    /// Show verbose output including API health check
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Output in JSON format
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Check API health only
    #[arg(short = 'H', long)]
    pub health: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", s))
}
