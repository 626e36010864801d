//! Model catalog returned by `/models`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de;

/// Envelope of the `/models` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelList {
    /// Models in the order the API lists them
    #[serde(default)]
    pub data: Vec<ModelInfo>,

    /// Other top-level fields such as `object`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single model entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier, e.g. `deepseek-chat`
    #[serde(default)]
    pub id: String,

    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Context window in tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,

    /// Absent from the live endpoint; never serialized when empty
    #[serde(default, skip_serializing_if = "Pricing::is_empty")]
    pub pricing: Pricing,

    /// Fields this client does not know about yet (`object`, `owned_by`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Prices per 1K tokens, kept as decimal strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default, deserialize_with = "de::price", skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(default, deserialize_with = "de::price", skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Pricing {
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none()
    }
}

impl ModelInfo {
    /// Display name, falling back to the identifier
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}
