//! Configuration management module
//!
//! Resolves the API token and the run settings from arguments and environment variables.

pub mod credentials;
pub mod settings;

pub use credentials::{resolve_token, CredentialResolver, ResolvedToken, Token, TokenSource};
pub use settings::{LoggingConfig, Mode, OutputFormat, Reports, Settings};
