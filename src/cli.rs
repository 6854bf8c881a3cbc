//! Command-line interface definitions.
//!
//! Two subcommands: `crawl` runs the archive crawl and writes the article
//! JSON file, `show` prints a previously written file as readable text
//! blocks. Every crawl parameter (base URL, section, year range, article
//! cap, pacing) is exposed here, with environment-variable fallbacks where
//! it makes sense for deployment.

use clap::{Args, Parser, Subcommand};

/// Command-line arguments for the Guardian archive scraper.
///
/// # Examples
///
/// ```sh
/// # Crawl two years of us-news, capped at 500 articles
/// guardian_archive_scraper crawl --start-year 2024 --end-year 2025 -m 500
///
/// # Crawl the football section into a custom file
/// guardian_archive_scraper crawl -s football -o ./football.json
///
/// # Print the first 20 collected articles
/// guardian_archive_scraper show -n 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crawl the daily archive pages and write the article JSON file
    Crawl(CrawlArgs),
    /// Print the first records of a previously written article JSON file
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Site base URL
    #[arg(
        long,
        env = "GUARDIAN_BASE_URL",
        default_value = "https://www.theguardian.com"
    )]
    pub base_url: String,

    /// Section to crawl (us-news, football, world, environment, ...)
    #[arg(short, long, env = "GUARDIAN_SECTION", default_value = "us-news")]
    pub section: String,

    /// First year of the crawl range
    #[arg(long, default_value_t = 2024)]
    pub start_year: i32,

    /// Last year of the crawl range (inclusive)
    #[arg(long, default_value_t = 2025)]
    pub end_year: i32,

    /// Stop after this many articles
    #[arg(short, long, default_value_t = 8888)]
    pub max_articles: usize,

    /// Output path for the article JSON file
    #[arg(short, long, default_value = "GuardianData/guardian_articles.json")]
    pub output: String,

    /// Pause between article fetches, in milliseconds
    #[arg(long, default_value_t = 200)]
    pub delay_ms: u64,

    /// Per-request HTTP timeout, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Article JSON file to read
    #[arg(short, long, default_value = "GuardianData/guardian_articles.json")]
    pub input: String,

    /// Number of records to print
    #[arg(short = 'n', long, default_value_t = 100)]
    pub limit: usize,
}
