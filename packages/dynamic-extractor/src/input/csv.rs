use std::io::Read;
use std::path::Path;

use crate::error::{ExtractorError, Result};
use crate::types::dataset::Dataset;

/// Parse CSV with a header row. Cells are kept as strings.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(ExtractorError::Input("CSV file has no header row".into()));
    }

    let rows = csv_reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<std::result::Result<Vec<Vec<String>>, _>>()?;

    Dataset::new(headers, rows)
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        ExtractorError::Input(format!("could not open {}: {}", path.display(), e))
    })?;
    let dataset = read_csv(file)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.headers().len(),
        "Loaded CSV"
    );
    Ok(dataset)
}
