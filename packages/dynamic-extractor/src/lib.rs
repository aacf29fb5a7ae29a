//! Dynamic Data Extractor
//!
//! For each entry in a chosen column of a table (company names, say), run
//! a web search, hand the organic results to a language model, and pull out
//! a target field: email, address, phone number, or the answer to a custom
//! prompt.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dynamic_extractor::{Config, FieldKind, Session};
//!
//! let mut session = Session::new(Config::from_env()?);
//! session.load_csv("companies.csv")?;
//!
//! let table = session.run("Company", &FieldKind::Email).await?;
//! for record in table.records() {
//!     println!("{}: {}", record.entry, record.value());
//! }
//! session.export(None)?; // extracted_email.csv
//! ```
//!
//! # Modules
//!
//! - [`query`] - Search query and model instruction construction
//! - [`traits`] - Search and model seams (SerpAPI, Groq)
//! - [`extractor`] - Pattern filtering of model output
//! - [`pipeline`] - Row-wise orchestration with per-row isolation
//! - [`results`] - Result table and CSV export
//! - [`input`] - CSV and Google Sheets loading
//! - [`session`] - Session state across load / run / export
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod error;
pub mod extractor;
pub mod input;
pub mod patterns;
pub mod pipeline;
pub mod query;
pub mod results;
pub mod session;
pub mod testing;
pub mod traits;
pub mod types;

pub use config::{ApiKeys, Config, SecretString};
pub use error::{ExtractorError, Result};
pub use extractor::extract_field;
pub use pipeline::{Pipeline, PipelineOptions};
pub use query::{build_query, PreparedQuery, PLACEHOLDER};
pub use results::{ResultRecord, ResultTable};
pub use session::{RunState, Session};
pub use traits::{
    agent::{ExtractionAgent, GroqAgent},
    searcher::{SearchResult, SerpApiSearcher, WebSearcher},
};
pub use types::{dataset::Dataset, field_kind::FieldKind, outcome::ExtractionOutcome};

pub use testing::{MockAgent, MockSearcher};
