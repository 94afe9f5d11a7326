//! Newsdeck - terminal browser for news headlines
//!
//! This library provides the core functionality for fetching top headlines
//! from a news provider: configuration and credential loading, request
//! building, the HTTP fetcher, and the error taxonomy shared by the
//! frontends.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, FetchError, NewsdeckError, Result};
pub use fetch::Fetcher;
pub use query::{Category, Query};
pub use types::{Article, HeadlinesResponse, Source};
