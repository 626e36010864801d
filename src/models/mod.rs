//! Data models module
//!
//! Response bodies of the DeepSeek account API. Every remote field is
//! optional with a default so upstream additions never break decoding.

pub mod balance;
pub mod catalog;
pub mod usage;

pub use balance::BalanceInfo;
pub use catalog::{ModelInfo, ModelList, Pricing};
pub use usage::{UsageQuery, UsageReport};

/// Lenient field decoders shared by the response models
pub(crate) mod de {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Decimal amount sent either as a JSON number or a numeric string.
    /// Missing or null values decode as zero.
    pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(0.0),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom(format!("decimal out of range: {}", n))),
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid decimal: {:?}", s))),
            Some(other) => Err(D::Error::custom(format!("expected decimal, got {}", other))),
        }
    }

    /// Price kept as text to preserve precision. Numbers are converted.
    pub fn price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(D::Error::custom(format!("expected price, got {}", other))),
        }
    }
}
