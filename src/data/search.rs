//! Web search API client
//!
//! Fetches course suggestions from a Google Custom Search compatible endpoint
//! and maps the returned items into `CourseItem` records.

use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::Deserialize;
use thiserror::Error;

use super::CourseItem;

/// Base URL for the Google Custom Search JSON API
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Errors that can occur when fetching course suggestions
#[derive(Debug, Error)]
pub enum SearchError {
    /// A required credential was not configured
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse search response: {0}")]
    ParseError(#[from] serde_json::Error),
}

// The request URL carries the API key, so it never makes it into the message
impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        SearchError::RequestFailed(error.without_url())
    }
}

/// Anything that can turn a search query into course suggestions
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Runs a search for the given free-form query
    async fn search(&self, query: &str) -> Result<Vec<CourseItem>, SearchError>;
}

/// Response envelope from the search API
#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Result items; absent when the search has no hits
    #[serde(default)]
    items: Option<Vec<SearchItem>>,
}

/// A single search result item. Only the fields we display are kept.
#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Client for the custom search API
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    cx: Option<String>,
}

impl SearchClient {
    /// Creates a new SearchClient against the default endpoint
    ///
    /// # Arguments
    /// * `api_key` - API credential sent as the `key` parameter
    /// * `cx` - Search engine context id sent as the `cx` parameter
    pub fn new(api_key: Option<String>, cx: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_SEARCH_URL.to_string(),
            api_key,
            cx,
        }
    }

    /// Overrides the endpoint the client talks to
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the GET request for a query without sending it
    fn build_request(&self, query: &str) -> Result<Request, SearchError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(SearchError::MissingConfig("search API key"))?;
        let cx = self
            .cx
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(SearchError::MissingConfig("search engine id (cx)"))?;

        let request = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("key", key), ("cx", cx)])
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<CourseItem>, SearchError> {
        let request = self.build_request(query)?;
        let response = self.client.execute(request).await?.error_for_status()?;
        let text = response.text().await?;
        parse_response(&text)
    }
}

/// Parses a search API response body into course items
///
/// A response without `items` yields an empty list.
fn parse_response(body: &str) -> Result<Vec<CourseItem>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let items = response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| CourseItem {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
        })
        .collect();
    Ok(items)
}
