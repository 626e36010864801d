//! API token discovery
//!
//! Sources are tried in a fixed order and the first non-empty value wins:
//! 1. the explicit `--token` value
//! 2. `DEEPSEEK_API_TOKEN`
//! 3. the fallback variables in [`FALLBACK_ENV_VARS`] order

use std::fmt;
use tracing::debug;

use crate::utils::error::{DsbcError, DsbcResult};

/// Canonical environment variable holding the API token
pub const DEFAULT_ENV_VAR: &str = "DEEPSEEK_API_TOKEN";

/// Alternative names used by compatible tooling, checked in this order
pub const FALLBACK_ENV_VARS: [&str; 3] = ["DEEPSEEK_TOKEN", "DEEPSEEK_API_KEY", "OPENAI_API_KEY"];

/// Opaque bearer credential
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Preview for verbose output: first 8 and last 4 characters.
    /// Short tokens overlap and so show in full.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let head: String = chars.iter().take(8).collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Where a resolved token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Explicit,
    Canonical,
    Fallback(&'static str),
}

impl TokenSource {
    /// Notice for the diagnostic stream, only produced for fallback variables
    pub fn advisory(&self) -> Option<String> {
        match self {
            TokenSource::Fallback(var) => {
                Some(format!("Note: Using token from {} environment variable", var))
            }
            TokenSource::Explicit | TokenSource::Canonical => None,
        }
    }
}

/// Token plus the source it was taken from
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub token: Token,
    pub source: TokenSource,
}

impl ResolvedToken {
    pub fn advisory(&self) -> Option<String> {
        self.source.advisory()
    }

    pub fn into_token(self) -> Token {
        self.token
    }
}

/// Resolves the API token from an explicit value and an environment lookup
pub struct CredentialResolver<F> {
    lookup: F,
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

impl CredentialResolver<fn(&str) -> Option<String>> {
    /// Resolver reading the process environment
    pub fn from_env() -> Self {
        Self {
            lookup: process_env,
        }
    }
}

impl<F> CredentialResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Resolver reading variables through `lookup`
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    fn non_empty(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.is_empty())
    }

    pub fn resolve(&self, explicit: Option<&str>) -> DsbcResult<ResolvedToken> {
        if let Some(token) = explicit.filter(|t| !t.is_empty()) {
            debug!("Using explicit API token");
            return Ok(ResolvedToken {
                token: Token::new(token),
                source: TokenSource::Explicit,
            });
        }

        if let Some(token) = self.non_empty(DEFAULT_ENV_VAR) {
            debug!("Using API token from {}", DEFAULT_ENV_VAR);
            return Ok(ResolvedToken {
                token: Token::new(token),
                source: TokenSource::Canonical,
            });
        }

        for var in FALLBACK_ENV_VARS {
            if let Some(token) = self.non_empty(var) {
                debug!("Using API token from fallback variable {}", var);
                return Ok(ResolvedToken {
                    token: Token::new(token),
                    source: TokenSource::Fallback(var),
                });
            }
        }

        Err(DsbcError::missing_credential())
    }
}

/// Resolve the token against the process environment
pub fn resolve_token(explicit: Option<&str>) -> DsbcResult<ResolvedToken> {
    CredentialResolver::from_env().resolve(explicit)
}
