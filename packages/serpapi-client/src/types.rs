use serde::{Deserialize, Serialize};

/// Query parameters for a Google search through SerpAPI.
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    pub engine: String,
    pub q: String,
}

impl SearchParams {
    pub fn google(query: impl Into<String>) -> Self {
        Self {
            engine: "google".to_string(),
            q: query.into(),
        }
    }
}

/// The subset of a SerpAPI search response this client consumes.
///
/// Everything other than `organic_results` (ads, knowledge graph, related
/// questions) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,

    /// Set by SerpAPI when the search ran but produced nothing usable,
    /// e.g. "Google hasn't returned any results for this query."
    #[serde(default)]
    pub error: Option<String>,
}

/// A single natural (non-ad) Google result.
///
/// Fields SerpAPI adds beyond the typed ones (`displayed_link`, `favicon`,
/// `sitelinks`, ...) are kept in `extra` so the record serializes back out
/// in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganicResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OrganicResult {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            position: None,
            title: title.into(),
            link: link.into(),
            snippet: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }
}
