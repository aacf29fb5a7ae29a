//! In-memory tabular input: a header row plus string cells.

use crate::error::{ExtractorError, Result};

/// An ordered table of string cells with named columns.
///
/// Every row has exactly `headers.len()` cells: short rows are padded with
/// empty strings and surplus cells are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if headers.is_empty() {
            return Err(ExtractorError::Input("dataset has no header row".into()));
        }

        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Ok(Self { headers, rows })
    }

    /// Build from raw rows where the first row is the header.
    pub fn from_header_row(mut values: Vec<Vec<String>>) -> Result<Self> {
        if values.is_empty() {
            return Err(ExtractorError::Input(
                "No data found in the specified range".into(),
            ));
        }
        let headers = values.remove(0);
        Self::new(headers, values)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, for previews.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of a column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name).ok_or_else(|| {
            ExtractorError::Input(format!(
                "column {:?} not found (available: {})",
                name,
                self.headers.join(", ")
            ))
        })?;
        Ok(self.rows.iter().map(|row| row[idx].clone()).collect())
    }
}
