//! `rt-sheet`: scrape Rotten Tomatoes pages listed in a CSV sheet and
//! write the extracted records back into the same rows.

mod csv_sheet;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use rt_core::{ClientConfig, RtScraper, SheetSync, SyncOptions, TracingReporter};

use crate::csv_sheet::CsvSheet;

#[derive(Parser)]
#[command(name = "rt-sheet")]
#[command(about = "Fill movie and TV rows of a sheet from Rotten Tomatoes pages", long_about = None)]
struct Cli {
    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Also append errors to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape a single page and print the record as JSON
    Scrape {
        /// Movie or TV season URL
        url: String,
    },

    /// Scrape every URL in a sheet column and write the records back
    Sync {
        /// CSV file; row 1 must hold the record column headers
        #[arg(short, long)]
        sheet: PathBuf,

        /// Where to write the updated sheet (defaults to overwriting --sheet)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 1-based column holding the URLs
        #[arg(long, default_value_t = 17)]
        url_column: usize,

        /// First row to sync
        #[arg(long, default_value_t = 2)]
        start_row: usize,

        /// Last row to sync (inclusive)
        #[arg(long)]
        end_row: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_file = match &cli.log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rt_core=info,rt_sheet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(log_file.map(|file| {
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_filter(LevelFilter::ERROR)
        }))
        .init();
    let scraper = RtScraper::with_config(ClientConfig {
        timeout_secs: cli.timeout,
        ..ClientConfig::default()
    })?;

    match cli.command {
        Command::Scrape { url } => {
            let record = scraper.scrape(&url).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Sync {
            sheet,
            output,
            url_column,
            start_row,
            end_row,
        } => {
            let mut store = CsvSheet::open(&sheet)?;
            let options = SyncOptions {
                url_column,
                start_row,
                end_row,
            };

            let summary = SheetSync::new(&scraper, TracingReporter, options)
                .run(&mut store)
                .await?;

            let output = output.unwrap_or(sheet);
            store.save(&output)?;
            info!(
                path = %output.display(),
                written = summary.written,
                skipped = summary.skipped,
                failed = summary.failed,
                "sheet saved"
            );
        }
    }

    Ok(())
}
