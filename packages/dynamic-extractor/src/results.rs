//! Result table: one record per processed row, exported as CSV.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExtractorError, Result};
use crate::types::{field_kind::FieldKind, outcome::ExtractionOutcome};

/// One row's entry and outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub entry: String,
    pub outcome: ExtractionOutcome,
}

impl ResultRecord {
    pub fn new(entry: impl Into<String>, outcome: ExtractionOutcome) -> Self {
        Self {
            entry: entry.into(),
            outcome,
        }
    }

    pub fn value(&self) -> String {
        self.outcome.value()
    }
}

/// Ordered outcomes for a single run, in input row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    kind: FieldKind,
    records: Vec<ResultRecord>,
}

impl ResultTable {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `["entry", <kind label or "result">]`
    pub fn headers(&self) -> [&'static str; 2] {
        ["entry", self.kind.column_label()]
    }

    /// Number of rows that produced a value rather than a sentinel.
    pub fn found_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_found()).count()
    }

    /// `extracted_{kind}.csv`
    pub fn default_filename(&self) -> String {
        format!("extracted_{}.csv", self.kind.label())
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.headers())?;
        for record in &self.records {
            csv_writer.write_record([record.entry.as_str(), record.value().as_str()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| ExtractorError::Input(format!("CSV output is not UTF-8: {}", e)))
    }

    /// Write to `path`, or to [`Self::default_filename`] in the current
    /// directory. Returns the path written.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(self.default_filename()));
        let file = std::fs::File::create(&path)?;
        self.write_csv(file)?;
        tracing::info!(path = %path.display(), rows = self.len(), "Exported results");
        Ok(path)
    }

    /// Re-open an exported table. The header must match `kind`.
    pub fn read_csv<R: Read>(reader: R, kind: FieldKind) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut table = ResultTable::new(kind);
        let expected = table.headers();
        if headers.len() != 2
            || headers.get(0) != Some(expected[0])
            || headers.get(1) != Some(expected[1])
        {
            return Err(ExtractorError::Input(format!(
                "expected header {:?}, found {:?}",
                expected,
                headers.iter().collect::<Vec<_>>()
            )));
        }

        for row in csv_reader.records() {
            let row = row?;
            let entry = row.get(0).unwrap_or_default();
            let value = row.get(1).unwrap_or_default();
            let outcome = ExtractionOutcome::from_value(&table.kind, value);
            table.push(ResultRecord::new(entry, outcome));
        }

        Ok(table)
    }
}
