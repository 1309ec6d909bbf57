use schemars::JsonSchema;
use serde::Deserialize;

use nd_newsapi::query::{DEFAULT_PAGE_SIZE, DEFAULT_SOURCES};

/// Arguments for the `get_news` tool. Doc comments become field
/// descriptions in the schema published to the host.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNewsParams {
    /// Search query keyword
    #[serde(default)]
    pub q: Option<String>,
    /// Start date (YYYY-MM-DD), defaults to today (UTC)
    #[serde(default)]
    pub from_date: Option<String>,
    /// End date (YYYY-MM-DD), defaults to today (UTC)
    #[serde(default)]
    pub to_date: Option<String>,
    /// News source identifier
    #[serde(default = "default_sources")]
    pub sources: String,
    /// Number of articles to retrieve (upstream caps at 100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_sources() -> String {
    DEFAULT_SOURCES.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
