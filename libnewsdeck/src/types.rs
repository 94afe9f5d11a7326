//! Wire types for the headlines provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One headline as returned by the provider.
///
/// Field names follow the provider's camelCase JSON. Everything except the
/// title and link is nullable in practice, so those fields stay optional
/// rather than failing the whole page on one sparse article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

/// Response envelope for the top-headlines endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    pub status: String,
    pub total_results: u64,
    pub articles: Vec<Article>,
}

impl Article {
    /// Publication time formatted for display.
    ///
    /// The provider sends RFC 3339 timestamps; anything that does not parse
    /// is shown verbatim rather than hidden.
    pub fn published_display(&self) -> String {
        match &self.published_at {
            Some(raw) => match raw.parse::<DateTime<Utc>>() {
                Ok(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
                Err(_) => raw.clone(),
            },
            None => String::new(),
        }
    }

    pub fn author_display(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }

    pub fn description_display(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
