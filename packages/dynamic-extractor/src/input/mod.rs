//! Input providers: local CSV files and Google Sheets.

pub mod csv;
pub mod sheets;

pub use self::csv::{load_csv, read_csv};
pub use self::sheets::SheetsClient;
