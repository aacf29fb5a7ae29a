//! Pure SerpAPI REST client.
//!
//! A minimal client for SerpAPI's Google engine. Only organic results are
//! exposed.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::SerpApiClient;
//!
//! let client = SerpApiClient::new("your-api-key".into());
//!
//! let results = client.google_search("Email of Acme Corp Company").await?;
//! for result in &results {
//!     println!("{} - {}", result.title, result.link);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SerpApiError};
pub use types::{OrganicResult, SearchParams, SearchResponse};

const BASE_URL: &str = "https://serpapi.com";

pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `SERPAPI_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SERPAPI_KEY")
            .map_err(|_| SerpApiError::Config("SERPAPI_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Run a search and return the full (consumed subset of the) response.
    ///
    /// One request, no retry. Transport timeouts surface as `Network`.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let start = std::time::Instant::now();
        let url = format!("{}/search.json", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let response: SearchResponse = resp
            .json()
            .await
            .map_err(|e| SerpApiError::Parse(e.to_string()))?;

        if let Some(message) = &response.error {
            tracing::debug!(query = %params.q, %message, "SerpAPI returned no usable results");
        }

        tracing::debug!(
            query = %params.q,
            organic = response.organic_results.len(),
            duration_ms = start.elapsed().as_millis(),
            "SerpAPI search"
        );

        Ok(response)
    }

    /// Google search returning only the organic results (possibly empty).
    pub async fn google_search(&self, query: &str) -> Result<Vec<OrganicResult>> {
        let response = self.search(&SearchParams::google(query)).await?;
        Ok(response.organic_results)
    }
}

impl std::fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let client = SerpApiClient::new("serp-secret".into());
        assert!(!format!("{:?}", client).contains("serp-secret"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = SerpApiClient::new("serp-test".into()).with_base_url("http://127.0.0.1:9");
        let err = client.google_search("anything").await.unwrap_err();
        assert!(matches!(err, SerpApiError::Network(_)));
    }
}
