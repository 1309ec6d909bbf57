pub mod service;
pub mod types;

pub use service::NewsService;
pub use types::GetNewsParams;
