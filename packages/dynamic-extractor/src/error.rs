//! Typed errors for the extraction pipeline.
//!
//! Only configuration and data-source errors ever reach the caller of a
//! run. Search and agent failures are absorbed into the affected row's
//! outcome by the pipeline.

use thiserror::Error;

/// Errors that can occur while loading data or running an extraction.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Missing or invalid configuration (API keys, settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// Data source problem (unreadable file, empty sheet, unknown column)
    #[error("input error: {0}")]
    Input(String),

    /// Web search call failed
    #[error("search failed: {0}")]
    Search(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Language-model call failed
    #[error("agent failed: {0}")]
    Agent(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Operation not allowed in the session's current run state
    #[error("invalid state: {0}")]
    State(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serpapi_client::SerpApiError> for ExtractorError {
    fn from(err: serpapi_client::SerpApiError) -> Self {
        Self::Search(Box::new(err))
    }
}

impl From<chat_client::ChatError> for ExtractorError {
    fn from(err: chat_client::ChatError) -> Self {
        Self::Agent(Box::new(err))
    }
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
