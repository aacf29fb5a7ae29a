//! Google Sheets values API client.
//!
//! Reads a single range (default tab `Sheet1`) with an API key. The sheet
//! must be readable with that key (shared or public).

use serde::Deserialize;

use crate::config::{SecretString, DEFAULT_SHEET_RANGE};
use crate::error::{ExtractorError, Result};
use crate::types::dataset::Dataset;

const BASE_URL: &str = "https://sheets.googleapis.com/v4";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug)]
pub struct SheetsClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    range: String,
}

impl SheetsClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
            range: DEFAULT_SHEET_RANGE.to_string(),
        }
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Raw cell values of the configured range.
    pub async fn fetch_values(&self, sheet_id: &str) -> Result<Vec<Vec<String>>> {
        let sheet_id = sheet_id.trim();
        if sheet_id.is_empty() {
            return Err(ExtractorError::Input("Please enter the Google Sheet ID".into()));
        }

        let url = self.values_url(sheet_id)?;
        let resp = self
            .client
            .get(url)
            .query(&[("key", self.api_key.expose())])
            .send()
            .await
            .map_err(|e| ExtractorError::Input(format!("Google Sheets request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExtractorError::Input(format!(
                "Google Sheets API error {}: {}",
                status, body
            )));
        }

        let range: ValueRange = resp
            .json()
            .await
            .map_err(|e| ExtractorError::Input(format!("unexpected Google Sheets response: {}", e)))?;
        Ok(range.values)
    }

    /// `{base}/spreadsheets/{id}/values/{range}`, each segment percent-encoded.
    fn values_url(&self, sheet_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ExtractorError::Config(format!("invalid Google Sheets URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ExtractorError::Config(format!("invalid Google Sheets URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["spreadsheets", sheet_id, "values", self.range.as_str()]);
        Ok(url)
    }

    /// Load a sheet as a dataset, first row as header.
    pub async fn load(&self, sheet_id: &str) -> Result<Dataset> {
        let values = self.fetch_values(sheet_id).await?;
        let dataset = Dataset::from_header_row(values)?;
        tracing::info!(
            sheet_id,
            range = %self.range,
            rows = dataset.len(),
            "Loaded Google Sheet"
        );
        Ok(dataset)
    }
}
