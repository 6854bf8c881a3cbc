//! Companion reader: renders the article JSON file as text blocks.
//!
//! Each record prints as a fixed block: a separator rule, the URL, the
//! title, the dateline, the byline, and the full text, with blank lines
//! between the parts. Only read access to the JSON schema is needed here.

use crate::models::ArticleRecord;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

const SEPARATOR_WIDTH: usize = 80;

/// Render a single record in the block format.
pub fn render_record(record: &ArticleRecord) -> String {
    format!(
        "{}\n\n{}\n\nTitle: {}\n{}\nAuthor(s): {}\n\n{}\n\n",
        "─".repeat(SEPARATOR_WIDTH),
        record.url,
        record.title,
        record.publication_date,
        record.authors,
        record.full_text,
    )
}

/// Read the article file at `path` and print its first `limit` records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain a JSON
/// array of records.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn show_records(path: &str, limit: usize) -> Result<(), Box<dyn Error>> {
    let json = fs::read_to_string(path).await?;
    let records: Vec<ArticleRecord> = serde_json::from_str(&json)?;
    info!(total = records.len(), limit, "Read article file");

    for record in records.iter().take(limit) {
        print!("{}", render_record(record));
    }

    Ok(())
}
