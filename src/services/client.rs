//! HTTP client service
//!
//! Encapsulates HTTP communication with the DeepSeek account API. Every
//! operation is a single GET without retries.

use crate::config::credentials::Token;
use crate::models::{BalanceInfo, ModelInfo, ModelList, UsageQuery, UsageReport};
use crate::utils::error::{DsbcError, DsbcResult, Operation, RequestError, ERROR_BODY_LIMIT};
use crate::utils::logging::truncate_content;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// DeepSeek API base URL
pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("dsbc/", env!("CARGO_PKG_VERSION"));

/// Content type sent with every request
pub const CONTENT_TYPE: &str = "application/json";

pub const BALANCE_PATH: &str = "/user/balance";
pub const MODELS_PATH: &str = "/models";
pub const USAGE_PATH: &str = "/usage";

/// Timeout for data requests
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the health check
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Token and the headers derived from it, fixed at construction
#[derive(Debug, Clone)]
pub struct ClientConfig {
    token: Token,
    authorization: String,
}

impl ClientConfig {
    pub fn new(token: Token) -> Self {
        let authorization = format!("Bearer {}", token.as_str());
        Self {
            token,
            authorization,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Headers attached to every request
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Authorization", self.authorization.as_str()),
            ("Content-Type", CONTENT_TYPE),
            ("User-Agent", USER_AGENT),
        ]
    }
}

/// DeepSeek API client
///
/// Bound to one token for its whole lifetime; use a new client to switch tokens.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    client: Client,
    config: ClientConfig,
    base_url: String,
}

impl DeepSeekClient {
    /// Create a client for the public DeepSeek API
    pub fn new(token: impl Into<Token>) -> Self {
        Self::with_base_url(token, DEEPSEEK_API_BASE)
    }

    /// Create a client against another base URL, e.g. a local mock server
    ///
    /// No I/O happens here and no token is rejected; a token that is not a
    /// valid header value fails at send time.
    ///
    /// # Panics
    ///
    /// Only if reqwest cannot initialise its TLS backend at all, in which
    /// case both the configured builder and the default client panic.
    pub fn with_base_url(token: impl Into<Token>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                debug!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        Self {
            client,
            config: ClientConfig::new(token.into()),
            base_url,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get account balance information
    pub async fn get_balance(&self) -> DsbcResult<BalanceInfo> {
        self.fetch(Operation::Balance, BALANCE_PATH, &[]).await
    }

    /// Get available models and their pricing
    pub async fn get_models(&self) -> DsbcResult<Vec<ModelInfo>> {
        let list: ModelList = self.fetch(Operation::Models, MODELS_PATH, &[]).await?;
        debug!("Successfully retrieved {} models", list.data.len());
        Ok(list.data)
    }

    /// Balance body exactly as the API sent it
    pub async fn get_balance_json(&self) -> DsbcResult<Value> {
        self.fetch_value(Operation::Balance, BALANCE_PATH, &[]).await
    }

    /// Models body exactly as the API sent it
    pub async fn get_models_json(&self) -> DsbcResult<Value> {
        self.fetch_value(Operation::Models, MODELS_PATH, &[]).await
    }

    /// Get usage statistics, optionally limited to a date range
    pub async fn get_usage(&self, query: &UsageQuery) -> DsbcResult<UsageReport> {
        self.fetch(Operation::Usage, USAGE_PATH, &query.params()).await
    }

    /// Check that the API is reachable and accepts the token.
    ///
    /// Never fails: any error or a status other than 200 yields `false`.
    pub async fn check_health(&self) -> bool {
        debug!("Performing DeepSeek API health check");

        match self.request(BALANCE_PATH, HEALTH_TIMEOUT).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("Health check returned {}", status);
                status == StatusCode::OK
            }
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }

    fn request(&self, path: &str, timeout: Duration) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.config
            .headers()
            .into_iter()
            .fold(self.client.get(url).timeout(timeout), |builder, (name, value)| {
                builder.header(name, value)
            })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
        query: &[(&str, String)],
    ) -> DsbcResult<T> {
        let value = self.fetch_value(operation, path, query).await?;
        serde_json::from_value(value).map_err(|e| DsbcError::RequestFailed {
            operation,
            cause: RequestError::Decode(e),
        })
    }

    async fn fetch_value(
        &self,
        operation: Operation,
        path: &str,
        query: &[(&str, String)],
    ) -> DsbcResult<Value> {
        debug!("Fetching {} from {}", operation, path);

        self.send_json(path, query)
            .await
            .map_err(|cause| DsbcError::RequestFailed { operation, cause })
    }

    async fn send_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, RequestError> {
        let mut builder = self.request(path, REQUEST_TIMEOUT);
        if !query.is_empty() {
            builder = builder.query(query);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("DeepSeek API request to {} failed: {}", path, status);
            return Err(RequestError::Status {
                status,
                body: truncate_content(body.trim(), ERROR_BODY_LIMIT),
            });
        }

        serde_json::from_str(&body).map_err(RequestError::Decode)
    }
}
