//! One user's extraction session: config, loaded dataset, last results.

use std::path::{Path, PathBuf};

use crate::config::{Config, SecretString};
use crate::error::{ExtractorError, Result};
use crate::input::{load_csv, SheetsClient};
use crate::pipeline::{Pipeline, PipelineOptions};
use crate::results::ResultTable;
use crate::traits::{
    agent::{ExtractionAgent, GroqAgent},
    searcher::{SerpApiSearcher, WebSearcher},
};
use crate::types::{dataset::Dataset, field_kind::FieldKind};

/// Lifecycle of the most recent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Exported,
}

pub struct Session {
    config: Config,
    dataset: Option<Dataset>,
    output: Option<ResultTable>,
    state: RunState,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dataset: None,
            output: None,
            state: RunState::Idle,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// The table of the last completed run.
    pub fn results(&self) -> Option<&ResultTable> {
        self.output.as_ref()
    }

    pub fn set_dataset(&mut self, dataset: Dataset) -> &Dataset {
        self.dataset.insert(dataset)
    }

    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<&Dataset> {
        let dataset = load_csv(path)?;
        Ok(self.set_dataset(dataset))
    }

    /// Load the given range of a Google Sheet (first row as header).
    pub async fn load_sheet(&mut self, sheet_id: &str, range: &str) -> Result<&Dataset> {
        let api_key = self.config.sheets_api_key.clone().ok_or_else(|| {
            ExtractorError::Config("GOOGLE_SHEETS_API_KEY must be set to load a Google Sheet".into())
        })?;
        let dataset = SheetsClient::new(api_key)
            .with_range(range)
            .load(sheet_id)
            .await?;
        Ok(self.set_dataset(dataset))
    }

    /// Run against SerpAPI and Groq using the session's keys.
    ///
    /// Missing keys fail here, before any network call.
    pub async fn run(&mut self, column: &str, kind: &FieldKind) -> Result<&ResultTable> {
        let keys = self.config.require_api_keys()?;
        let pipeline = Pipeline::new(
            SerpApiSearcher::new(&keys.serpapi),
            self.groq_agent(&keys.groq),
        )
        .with_options(PipelineOptions::default().with_concurrency(self.config.concurrency));

        self.run_with(&pipeline, column, kind).await
    }

    fn groq_agent(&self, key: &SecretString) -> GroqAgent {
        let agent = GroqAgent::new(key, &self.config.groq_model);
        match &self.config.groq_base_url {
            Some(url) => agent.with_base_url(url),
            None => agent,
        }
    }

    /// Run the given pipeline over the selected column.
    ///
    /// The result table is replaced only when the run completes; a run that
    /// fails to start leaves the previous table and state untouched.
    pub async fn run_with<S, A>(
        &mut self,
        pipeline: &Pipeline<S, A>,
        column: &str,
        kind: &FieldKind,
    ) -> Result<&ResultTable>
    where
        S: WebSearcher,
        A: ExtractionAgent,
    {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| ExtractorError::Input("no data loaded".into()))?;
        let entries = dataset.column(column)?;

        self.state = RunState::Running;
        let table = pipeline.run(&entries, column, kind).await;

        self.state = RunState::Completed;
        Ok(self.output.insert(table))
    }

    /// Write the last completed table as CSV. Returns the path written.
    pub fn export(&mut self, path: Option<&Path>) -> Result<PathBuf> {
        let table = match (self.state, &self.output) {
            (RunState::Completed | RunState::Exported, Some(table)) => table,
            _ => {
                return Err(ExtractorError::State(
                    "nothing to export: no completed run".into(),
                ))
            }
        };
        let written = table.save(path)?;
        self.state = RunState::Exported;
        Ok(written)
    }
}
