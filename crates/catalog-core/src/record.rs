//! Vehicle Record
//!
//! One entry of the car database as supplied by the page.

use serde::{Deserialize, Deserializer, Serialize};

/// Category shown on a card when the record carries no `class`.
pub const DEFAULT_CATEGORY: &str = "Premium";

/// A single vehicle in the catalog.
///
/// Records have no unique id; they are compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub drive: String,
    #[serde(default)]
    pub fuel: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city_mpg: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    /// Image URL, rewritten at most once by hydration
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl VehicleRecord {
    /// Category tag for display, falling back to [`DEFAULT_CATEGORY`].
    pub fn category(&self) -> &str {
        self.category_or(DEFAULT_CATEGORY)
    }

    pub fn category_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.class.as_deref() {
            Some(class) if !class.trim().is_empty() => class,
            _ => default,
        }
    }
}

/// Accept a JSON string, number, bool or null and keep it as text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
