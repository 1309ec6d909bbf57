pub mod digest;
pub mod error;
pub mod types;

pub use error::{Error, FetchError};
pub use types::{Article, RawResponse};

pub type Result<T> = std::result::Result<T, Error>;
