use std::env;
use std::fmt;
use std::time::Duration;

use nd_core::{Error, FetchError, RawResponse};

use crate::query::NewsQuery;

pub const NEWS_API_BASE: &str = "https://newsapi.org/v2/everything";
pub const USER_AGENT: &str = "news-app/1.0";

const API_KEY_VAR: &str = "NEWS_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the news API "everything" endpoint.
///
/// Holds only immutable configuration. The HTTP connection itself is
/// opened per fetch and released when the call finishes, so concurrent
/// invocations share nothing mutable.
#[derive(Clone)]
pub struct NewsApiClient {
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: NEWS_API_BASE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the API key from the `NEWS_API_KEY` environment variable.
    pub fn from_env() -> nd_core::Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", API_KEY_VAR)))?;
        Ok(Self::new(api_key))
    }

    /// Point the client at a different endpoint. Used by tests and by
    /// deployments that front the API with a proxy.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Perform the single GET for a query and parse the JSON body.
    ///
    /// Network failures, timeouts, non-success statuses and unparseable
    /// bodies all come back as a `FetchError`; nothing is retried and
    /// nothing panics.
    pub async fn fetch(&self, query: &NewsQuery) -> Result<RawResponse, FetchError> {
        tracing::debug!("requesting news articles from {}", self.endpoint);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let response = client
            .get(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
