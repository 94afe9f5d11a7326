//! Headline fetching against the provider API

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::query::{build_url, Query};
use crate::types::{Article, HeadlinesResponse};

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    endpoint: String,
    country: String,
    api_key: String,
}

impl Fetcher {
    pub fn new(endpoint: String, country: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("newsdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            country,
            api_key,
        }
    }

    /// Build a fetcher from loaded configuration.
    ///
    /// Fails when no API key is configured anywhere.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Ok(Self::new(
            config.endpoint.clone(),
            config.country.clone(),
            api_key,
        ))
    }

    /// Issue one headlines request for the given query.
    pub async fn fetch_headlines(
        &self,
        query: &Query,
    ) -> std::result::Result<Vec<Article>, FetchError> {
        let url = build_url(&self.endpoint, &self.country, query, &self.api_key)
            .map_err(|e| FetchError::Network(format!("invalid endpoint: {}", e)))?;

        // The URL carries the credential, so log the query instead.
        debug!(
            search = %query.search_text,
            category = ?query.category,
            "requesting headlines"
        );

        let response = self.client.get(&url).send().await.map_err(FetchError::from)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(FetchError::from)?;

        let articles = interpret_response(status, &bytes)?;
        debug!(count = articles.len(), "headlines received");
        Ok(articles)
    }
}

/// Map a raw HTTP outcome to articles or a fetch error.
///
/// 426 is the provider's insecure-transport rejection and gets its own
/// variant; any other non-success status is generic. A success status with
/// an undecodable body (the provider's JSON error envelope carries no
/// articles field) is a decode failure.
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> std::result::Result<Vec<Article>, FetchError> {
    if status == StatusCode::UPGRADE_REQUIRED {
        return Err(FetchError::UpgradeRequired);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let envelope: HeadlinesResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(envelope.articles)
}
