//! Error handling module
//!
//! Defines the error taxonomy surfaced to callers of the credential resolver
//! and the API client

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

use crate::config::credentials::DEFAULT_ENV_VAR;

/// Maximum number of characters of an error body kept in [`RequestError::Status`]
pub const ERROR_BODY_LIMIT: usize = 200;

/// Client operation that issued a failing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Balance,
    Models,
    Usage,
}

impl Operation {
    /// Name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Balance => "balance",
            Operation::Models => "models",
            Operation::Usage => "usage",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum DsbcError {
    /// No token could be resolved from any source
    #[error(
        "No API token provided. Set {env_var} environment variable or use --token argument."
    )]
    MissingCredential {
        /// Canonical environment variable the user should set
        env_var: &'static str,
    },

    /// A data request failed; the cause carries the details
    #[error("Failed to fetch {operation}")]
    RequestFailed {
        operation: Operation,
        #[source]
        cause: RequestError,
    },
}

/// Why a single request failed
#[derive(Error, Debug)]
pub enum RequestError {
    /// Connection failure, timeout or an unsendable request
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status {
        status: StatusCode,
        /// Response body, truncated to [`ERROR_BODY_LIMIT`] characters
        body: String,
    },

    /// The body of a successful response was not the expected JSON
    #[error("invalid JSON in response body")]
    Decode(#[source] serde_json::Error),
}

impl DsbcError {
    /// Error raised when no credential source yields a token
    pub fn missing_credential() -> Self {
        DsbcError::MissingCredential {
            env_var: DEFAULT_ENV_VAR,
        }
    }

    /// Operation that failed, if this is a request failure
    pub fn operation(&self) -> Option<Operation> {
        match self {
            DsbcError::RequestFailed { operation, .. } => Some(*operation),
            DsbcError::MissingCredential { .. } => None,
        }
    }

    /// HTTP status returned by the API, if the request got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DsbcError::RequestFailed {
                cause: RequestError::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before any response was received
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DsbcError::RequestFailed {
                cause: RequestError::Transport(_),
                ..
            }
        )
    }
}

/// Result type alias
pub type DsbcResult<T> = Result<T, DsbcError>;
