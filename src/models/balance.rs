//! Account balance model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de;

fn default_currency() -> String {
    "USD".to_string()
}

/// Balance information returned by `/user/balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceInfo {
    /// Total balance (default 0)
    #[serde(default, deserialize_with = "de::decimal")]
    pub total_balance: f64,

    /// Balance still available for use (default 0)
    #[serde(default, deserialize_with = "de::decimal")]
    pub available_balance: f64,

    /// Balance already consumed (default 0)
    #[serde(default, deserialize_with = "de::decimal")]
    pub used_balance: f64,

    /// Currency code (default "USD")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Account identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// ISO-8601 time the balance was computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Fields this client does not know about yet
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BalanceInfo {
    fn default() -> Self {
        Self {
            total_balance: 0.0,
            available_balance: 0.0,
            used_balance: 0.0,
            currency: default_currency(),
            account_id: None,
            timestamp: None,
            extra: Map::new(),
        }
    }
}

impl BalanceInfo {
    /// Share of the total balance already used, in percent.
    /// `None` when the total is not positive.
    pub fn usage_percentage(&self) -> Option<f64> {
        if self.total_balance > 0.0 {
            Some(self.used_balance / self.total_balance * 100.0)
        } else {
            None
        }
    }
}
