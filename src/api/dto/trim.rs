//! Serde helpers that strip surrounding whitespace while a request body is
//! deserialized, so `validator` rules see the value that gets stored.
//!
//! ```rust,ignore
//! #[serde(deserialize_with = "trim::string")]
//! #[validate(length(min = 10, max = 5000))]
//! pub message: String,
//! ```
//!
//! `Option` fields using these helpers need `#[serde(default)]`, otherwise a
//! missing field is an error instead of `None`.

use serde::{Deserialize, Deserializer};

fn trimmed(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(trimmed)
}

/// Trimmed optional string. A blank value stays `Some("")` so length rules
/// can reject it.
pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|value| value.map(trimmed))
}

/// Trimmed nullable patch field: absent is `None` (through
/// `#[serde(default)]`), `null` is `Some(None)`.
pub fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|value| Some(value.map(trimmed)))
}
