//! Query state and request URL construction

use url::Url;

/// Category tabs shown in the navigation bar.
///
/// Selecting a tab re-issues the fetch, but the category itself never
/// reaches the provider: every tab requests the same country-wide
/// top-headlines page. The tabs only drive highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    World,
    Bollywood,
    India,
    Sports,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::World,
        Category::Bollywood,
        Category::India,
        Category::Sports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::World => "World",
            Category::Bollywood => "Bollywood",
            Category::India => "Indian Political",
            Category::Sports => "Sports",
        }
    }

    /// Tab for a 1-based key press, if in range.
    pub fn from_index(index: usize) -> Option<Category> {
        match index {
            1 => Some(Category::World),
            2 => Some(Category::Bollywood),
            3 => Some(Category::India),
            4 => Some(Category::Sports),
            _ => None,
        }
    }
}

/// What the user is currently asking for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub search_text: String,
    pub category: Category,
}

/// Build the request URL for a query.
///
/// The q parameter is always sent, empty or not, and the category is
/// deliberately absent. Parameter order matches what the provider has
/// always been sent: country, q, apiKey.
pub fn build_url(
    endpoint: &str,
    country: &str,
    query: &Query,
    api_key: &str,
) -> Result<String, url::ParseError> {
    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("country", country)
        .append_pair("q", &query.search_text)
        .append_pair("apiKey", api_key);
    Ok(url.into())
}
