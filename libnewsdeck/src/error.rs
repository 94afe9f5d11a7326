//! Error types for Newsdeck

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NewsdeckError>;

#[derive(Error, Debug)]
pub enum NewsdeckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    WriteError(String),

    #[error("No API key configured: set api_key in the config file or the NEWSDECK_API_KEY environment variable")]
    MissingApiKey,
}

#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP 426: the provider refuses insecure transport.
    #[error("Upgrade required (HTTP 426)")]
    UpgradeRequired,

    /// Any other non-success HTTP status.
    #[error("Request failed with HTTP {0}")]
    Status(u16),

    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not decode as the expected envelope.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// The message shown to the user for this failure.
    ///
    /// Only the upgrade-required case gets a dedicated message; every other
    /// failure collapses to the generic retry-later string.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::UpgradeRequired => {
                "Upgrade Required: Please use a secure connection (HTTPS)."
            }
            FetchError::Status(_) | FetchError::Network(_) | FetchError::Decode(_) => {
                "Error fetching news. Please try again later."
            }
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
