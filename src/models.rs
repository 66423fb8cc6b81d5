//! Frontend Models
//!
//! Data structures matching the recipe API payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Recipe data structure (matches backend)
///
/// `name` and `description` are not validated: a record where they are
/// missing, `null` or not text renders with blank text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

#[cfg(test)]
impl Recipe {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Text as it would be displayed: strings as-is, numbers and booleans
/// printed, anything else blank
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
