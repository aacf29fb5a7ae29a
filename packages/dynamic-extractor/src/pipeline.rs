//! Row-wise extraction pipeline.
//!
//! For each entry: build query → search → model call → field extraction.
//! A row's search or model failure is absorbed into that row's outcome;
//! the run always yields exactly one record per entry, in input order.

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::extractor::extract_field;
use crate::query::build_query;
use crate::results::{ResultRecord, ResultTable};
use crate::traits::{agent::ExtractionAgent, searcher::WebSearcher};
use crate::types::{field_kind::FieldKind, outcome::ExtractionOutcome};

/// Prefix of the user message sent alongside the serialized results.
pub const RESULTS_PREFIX: &str = "JSON search results: ";

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Rows in flight at once. 1 processes rows strictly one after another.
    pub concurrency: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

impl PipelineOptions {
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Search + agent pair that processes entries.
pub struct Pipeline<S: WebSearcher, A: ExtractionAgent> {
    searcher: S,
    agent: A,
    options: PipelineOptions,
}

impl<S: WebSearcher, A: ExtractionAgent> Pipeline<S, A> {
    pub fn new(searcher: S, agent: A) -> Self {
        Self {
            searcher,
            agent,
            options: PipelineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Process a single entry. Never fails: problems become sentinel outcomes.
    pub async fn process_entry(
        &self,
        entry: &str,
        column: &str,
        kind: &FieldKind,
    ) -> ExtractionOutcome {
        let Some(prepared) = build_query(entry, column, kind) else {
            debug!(entry, "No query for entry (blank custom template)");
            return ExtractionOutcome::NoResults;
        };

        let results = match self.searcher.search(&prepared.query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(entry, query = %prepared.query, error = %e, "Search failed, treating as no results");
                return ExtractionOutcome::NoResults;
            }
        };

        if results.is_empty() {
            debug!(entry, query = %prepared.query, "No organic results");
            return ExtractionOutcome::NoResults;
        }

        let payload = match serde_json::to_string(&results) {
            Ok(json) => format!("{}{}", RESULTS_PREFIX, json),
            Err(e) => {
                warn!(entry, error = %e, "Could not serialize search results");
                return ExtractionOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        match self.agent.complete(&prepared.instruction, &payload).await {
            Ok(response) => extract_field(kind, &response),
            Err(e) => {
                warn!(entry, error = %e, "Agent call failed for row");
                ExtractionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Process every entry and collect the outcomes in input order.
    pub async fn run<E>(&self, entries: &[E], column: &str, kind: &FieldKind) -> ResultTable
    where
        E: AsRef<str>,
    {
        let start = std::time::Instant::now();
        info!(
            rows = entries.len(),
            column,
            kind = %kind,
            concurrency = self.options.concurrency,
            "Starting extraction run"
        );

        // `buffered` yields in submission order regardless of completion order.
        let outcomes: Vec<ExtractionOutcome> = stream::iter(entries)
            .map(|entry| self.process_entry(entry.as_ref(), column, kind))
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await;
        debug_assert_eq!(outcomes.len(), entries.len());

        let mut table = ResultTable::new(kind.clone());
        for (entry, outcome) in entries.iter().zip(outcomes) {
            table.push(ResultRecord::new(entry.as_ref(), outcome));
        }

        info!(
            rows = table.len(),
            found = table.found_count(),
            duration_ms = start.elapsed().as_millis(),
            "Extraction run complete"
        );

        table
    }
}
