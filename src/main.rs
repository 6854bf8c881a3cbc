//! # Guardian Archive Scraper
//!
//! Crawls The Guardian's daily archive pages over a configurable date range,
//! discovers article permalinks, extracts structured fields from each
//! article, and writes the collection as a single JSON array. A `show`
//! subcommand renders that file as readable text blocks.
//!
//! ## Usage
//!
//! ```sh
//! guardian_archive_scraper crawl -s us-news --start-year 2024 --end-year 2025
//! guardian_archive_scraper show -n 100
//! ```
//!
//! ## Architecture
//!
//! The crawl is a sequential pipeline:
//! 1. **Dates**: Iterate every valid calendar day in the range
//! 2. **Indexing**: Fetch that day's archive page and filter its links down
//!    to real article permalinks
//! 3. **Parsing**: Fetch each article and extract title, dateline, byline,
//!    and body text
//! 4. **Output**: Write all records as one pretty-printed JSON array
//!
//! One request is in flight at a time, with a fixed pause between article
//! fetches. Failed fetches are logged and skipped; only startup problems and
//! the final file write can end the process with an error.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod archive;
mod cli;
mod crawler;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::{Cli, Command, CrawlArgs};
use scrapers::guardian::GuardianScraper;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Crawl(crawl_args) => run_crawl(&crawl_args).await,
        Command::Show(show_args) => {
            outputs::text::show_records(&show_args.input, show_args.limit).await
        }
    }
}

async fn run_crawl(args: &CrawlArgs) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    info!(
        section = %args.section,
        start_year = args.start_year,
        end_year = args.end_year,
        max_articles = args.max_articles,
        "Starting archive crawl"
    );

    // Early check: ensure the output directory is writable before spending
    // hours on the crawl
    if let Some(parent) = Path::new(&args.output)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        if let Err(e) = ensure_writable_dir(&parent.to_string_lossy()).await {
            error!(
                path = %parent.display(),
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let scraper = GuardianScraper::new(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let records = crawler::run(&scraper, args).await;

    if let Err(e) = outputs::json::write_records(&records, &args.output).await {
        error!(path = %args.output, error = %e, "Failed to write article file");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        count = records.len(),
        path = %args.output,
        secs = elapsed.as_secs(),
        "Crawl complete"
    );

    Ok(())
}
