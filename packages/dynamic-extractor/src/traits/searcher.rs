//! Web search trait and the SerpAPI-backed implementation.

use async_trait::async_trait;
use serpapi_client::SerpApiClient;

use crate::config::SecretString;
use crate::error::Result;

/// An organic search result record, forwarded to the model as JSON.
pub use serpapi_client::OrganicResult as SearchResult;

/// Web search for a single query.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Organic results for the query, possibly empty.
    ///
    /// One outbound call per invocation; no retry.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Google search through SerpAPI.
#[derive(Debug)]
pub struct SerpApiSearcher {
    client: SerpApiClient,
}

impl SerpApiSearcher {
    pub fn new(api_key: &SecretString) -> Self {
        Self {
            client: SerpApiClient::new(api_key.expose().to_string()),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }
}

#[async_trait]
impl WebSearcher for SerpApiSearcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        Ok(self.client.google_search(query).await?)
    }
}
