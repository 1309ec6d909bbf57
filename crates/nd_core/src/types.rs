use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped payload returned by the upstream API. Not trusted until the
/// `articles` field has been checked.
pub type RawResponse = Value;

/// One upstream search result. Every field is optional; a missing field
/// renders as a placeholder instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl Article {
    /// Lenient extraction from one element of the `articles` array.
    /// Absent or non-string values become `None`.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            title: field("title"),
            description: field("description"),
            url: field("url"),
            published_at: field("publishedAt"),
        }
    }
}
