pub mod client;
pub mod query;

pub use client::NewsApiClient;
pub use query::NewsQuery;

pub mod prelude {
    pub use super::client::NewsApiClient;
    pub use super::query::NewsQuery;
    pub use nd_core::{Article, Error, FetchError, Result};
}
