pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use backend::QuestionBackend;
pub use client::ChatApi;
pub use config::{ApiConfig, ApiConfigBuilder};
pub use error::{ApiError, Result};
pub use types::{QuestionResponse, ThreadSummary};
