//! DeepSeek Balance Checker Library
//!
//! Resolves a DeepSeek API token and queries the account API for balance,
//! models, usage and health

pub mod cli;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{resolve_token, CredentialResolver, ResolvedToken, Settings, Token, TokenSource};
pub use models::{BalanceInfo, ModelInfo, UsageQuery, UsageReport};
pub use services::DeepSeekClient;
pub use utils::error::{DsbcError, DsbcResult, Operation, RequestError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
