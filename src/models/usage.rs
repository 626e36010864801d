//! Usage statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Date format used by the `/usage` query parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional date range for a usage request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UsageQuery {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Query parameters; a bound is only present when it was given
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start_date {
            params.push(("start_date", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.format(DATE_FORMAT).to_string()));
        }
        params
    }

    /// Human readable description of the range
    pub fn describe(&self) -> String {
        match (self.start_date, self.end_date) {
            (None, None) => "all time".to_string(),
            (Some(start), None) => format!("since {}", start.format(DATE_FORMAT)),
            (None, Some(end)) => format!("until {}", end.format(DATE_FORMAT)),
            (Some(start), Some(end)) => format!(
                "{} to {}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            ),
        }
    }
}

/// Body of the `/usage` response, passed through untyped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageReport(pub Value);

impl UsageReport {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
