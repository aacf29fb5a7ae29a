//! Command-line arguments and interactive prompts.
//!
//! Anything not given as a flag is asked for interactively.

pub mod render;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use dynamic_extractor::{Dataset, FieldKind, PLACEHOLDER};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dynamic-extractor")]
#[command(about = "Search the web for each row of a table and extract a field with an LLM")]
#[command(version)]
pub struct Cli {
    /// Read rows from a local CSV file (first row is the header)
    #[arg(long, conflicts_with = "sheet_id")]
    pub csv: Option<PathBuf>,

    /// Read rows from a Google Sheet by ID (needs GOOGLE_SHEETS_API_KEY)
    #[arg(long)]
    pub sheet_id: Option<String>,

    /// Sheet range to read
    #[arg(long, default_value = "Sheet1")]
    pub sheet_range: String,

    /// Column whose values are used in the queries
    #[arg(short, long)]
    pub column: Option<String>,

    /// Kind of information to extract
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Custom prompt template; `{company}` is replaced by each row's value
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Output CSV path (default: extracted_<kind>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rows processed at once (overrides EXTRACTOR_CONCURRENCY)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Print results without writing a CSV file
    #[arg(long)]
    pub no_export: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Email,
    Address,
    PhoneNumber,
    Custom,
}

/// Where the rows come from.
pub enum Source {
    Csv(PathBuf),
    Sheet(String),
}

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

pub fn choose_source(cli: &Cli) -> Result<Source> {
    if let Some(path) = &cli.csv {
        return Ok(Source::Csv(path.clone()));
    }
    if let Some(id) = &cli.sheet_id {
        return Ok(Source::Sheet(id.clone()));
    }

    let options = ["Upload CSV", "Google Sheets"];
    let selection = Select::with_theme(&theme())
        .with_prompt("Select a data source")
        .items(&options)
        .default(0)
        .interact()?;

    match selection {
        0 => {
            let path: String = Input::with_theme(&theme())
                .with_prompt("Path to your CSV file")
                .interact_text()?;
            Ok(Source::Csv(PathBuf::from(path.trim())))
        }
        _ => {
            let id: String = Input::with_theme(&theme())
                .with_prompt("Enter the Google Sheet ID")
                .interact_text()?;
            Ok(Source::Sheet(id))
        }
    }
}

pub fn choose_column(cli: &Cli, dataset: &Dataset) -> Result<String> {
    if let Some(column) = &cli.column {
        return Ok(column.clone());
    }

    let selection = Select::with_theme(&theme())
        .with_prompt("Select the column to use for queries")
        .items(dataset.headers())
        .default(0)
        .interact()?;

    Ok(dataset.headers()[selection].clone())
}

pub fn choose_kind(cli: &Cli) -> Result<FieldKind> {
    let arg = match cli.kind {
        Some(kind) => kind,
        None => {
            let options = ["email", "address", "phone number", "Custom Prompt"];
            let selection = Select::with_theme(&theme())
                .with_prompt("Select the type of information to extract or define a custom prompt")
                .items(&options)
                .default(0)
                .interact()?;
            match selection {
                0 => KindArg::Email,
                1 => KindArg::Address,
                2 => KindArg::PhoneNumber,
                _ => KindArg::Custom,
            }
        }
    };

    Ok(match arg {
        KindArg::Email => FieldKind::Email,
        KindArg::Address => FieldKind::Address,
        KindArg::PhoneNumber => FieldKind::PhoneNumber,
        KindArg::Custom => FieldKind::custom(custom_prompt(cli)?),
    })
}

fn custom_prompt(cli: &Cli) -> Result<String> {
    if let Some(prompt) = &cli.prompt {
        return Ok(prompt.clone());
    }

    println!(
        "A placeholder like {PLACEHOLDER} is replaced with the value from each row.\n\
         e.g. 'Get me the email address of {PLACEHOLDER} company' becomes\n\
         'Get me the email address of Google company' for the row 'Google'."
    );
    let prompt: String = Input::with_theme(&theme())
        .with_prompt("Custom prompt")
        .allow_empty(true)
        .interact_text()?;

    if prompt.trim().is_empty() {
        bail!("a custom prompt is required for the custom kind");
    }
    Ok(prompt)
}
