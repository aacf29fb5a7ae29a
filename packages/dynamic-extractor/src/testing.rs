//! Testing utilities: mock search and agent implementations.
//!
//! Both mocks are cheap to clone and share their state, so a test can hand
//! one clone to a [`Pipeline`](crate::pipeline::Pipeline) and keep another
//! to inspect recorded calls.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{ExtractorError, Result};
use crate::traits::{
    agent::ExtractionAgent,
    searcher::{SearchResult, WebSearcher},
};

/// Mock web searcher with canned results per query.
///
/// Unknown queries return `default_results` (empty unless set).
#[derive(Clone, Default)]
pub struct MockSearcher {
    results: Arc<RwLock<HashMap<String, Vec<SearchResult>>>>,
    default_results: Arc<RwLock<Vec<SearchResult>>>,
    failures: Arc<RwLock<HashSet<String>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results for an exact query.
    pub fn with_results(self, query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        self.results.write().unwrap().insert(query.into(), results);
        self
    }

    /// Results for any query without its own entry.
    pub fn with_default_results(self, results: Vec<SearchResult>) -> Self {
        *self.default_results.write().unwrap() = results;
        self
    }

    /// Make a query fail with a search error.
    pub fn failing_on(self, query: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(query.into());
        self
    }

    /// Delay the response for a query (for ordering tests).
    pub fn with_delay(self, query: impl Into<String>, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(query.into(), delay);
        self
    }

    /// Queries searched, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl WebSearcher for MockSearcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.calls.write().unwrap().push(query.to_string());

        let delay = self.delays.read().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failures.read().unwrap().contains(query) {
            return Err(ExtractorError::Search(
                format!("mock search failure for {:?}", query).into(),
            ));
        }

        let results = self.results.read().unwrap().get(query).cloned();
        Ok(results.unwrap_or_else(|| self.default_results.read().unwrap().clone()))
    }
}

/// Record of a call made to the mock agent.
#[derive(Debug, Clone)]
pub struct MockAgentCall {
    pub instruction: String,
    pub content: String,
}

/// Mock language model.
///
/// Responses are chosen by the first registered needle found in the user
/// content; otherwise the default response (empty unless set) is returned.
#[derive(Clone, Default)]
pub struct MockAgent {
    responses: Arc<RwLock<Vec<(String, String)>>>,
    default_response: Arc<RwLock<String>>,
    failures: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<MockAgentCall>>>,
}

impl MockAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with `response` when the content contains `needle`.
    pub fn with_response_when(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = response.into();
        self
    }

    /// Fail with an agent error when the content contains `needle`.
    pub fn failing_when(self, needle: impl Into<String>) -> Self {
        self.failures.write().unwrap().push(needle.into());
        self
    }

    pub fn calls(&self) -> Vec<MockAgentCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl ExtractionAgent for MockAgent {
    async fn complete(&self, instruction: &str, content: &str) -> Result<String> {
        self.calls.write().unwrap().push(MockAgentCall {
            instruction: instruction.to_string(),
            content: content.to_string(),
        });

        if self
            .failures
            .read()
            .unwrap()
            .iter()
            .any(|needle| content.contains(needle.as_str()))
        {
            return Err(ExtractorError::Agent("mock agent failure".into()));
        }

        let matched = self
            .responses
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| content.contains(needle.as_str()))
            .map(|(_, response)| response.clone());

        Ok(matched.unwrap_or_else(|| self.default_response.read().unwrap().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_searcher_records_calls() {
        let searcher = MockSearcher::new().with_results(
            "q1",
            vec![SearchResult::new("Title", "https://a.example")],
        );

        assert_eq!(searcher.search("q1").await.unwrap().len(), 1);
        assert!(searcher.search("q2").await.unwrap().is_empty());
        assert_eq!(searcher.calls(), vec!["q1", "q2"]);
    }

    #[tokio::test]
    async fn test_mock_agent_picks_response_by_needle() {
        let agent = MockAgent::new()
            .with_response_when("acme", "contact@acme.com")
            .with_default_response("nothing");

        assert_eq!(agent.complete("sys", "about acme").await.unwrap(), "contact@acme.com");
        assert_eq!(agent.complete("sys", "about globex").await.unwrap(), "nothing");
        assert_eq!(agent.call_count(), 2);
    }
}
