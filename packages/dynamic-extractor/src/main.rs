//! Dynamic Data Extractor CLI
//!
//! Load a CSV or Google Sheet, pick a column and a field kind, then search
//! and extract for every row and export the results as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dynamic_extractor::{Config, Session};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{render, Cli, Source};

const PREVIEW_ROWS: usize = 10;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,dynamic_extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".bright_red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency.max(1);
    }

    let mut session = Session::new(config);

    println!("{}", "Dynamic Data Extractor".bright_cyan().bold());
    println!();

    let dataset = match cli::choose_source(&cli)? {
        Source::Csv(path) => session
            .load_csv(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        Source::Sheet(id) => session
            .load_sheet(&id, &cli.sheet_range)
            .await
            .context("Failed to load Google Sheet")?,
    };
    render::print_preview(dataset, PREVIEW_ROWS);

    let column = cli::choose_column(&cli, dataset)?;
    let kind = cli::choose_kind(&cli)?;

    let rows = dataset.len();
    println!(
        "{}",
        format!("Extracting {} for {} rows of '{}'...", kind, rows, column).bright_yellow()
    );

    let table = session
        .run(&column, &kind)
        .await
        .context("Extraction did not start")?;
    println!();
    render::print_results(table);

    if !cli.no_export {
        let path = session.export(cli.output.as_deref())?;
        println!(
            "{} Results written to {}",
            "✓".bright_green(),
            path.display().to_string().bold()
        );
    }

    Ok(())
}
