//! JSON output for the collected article set.
//!
//! The whole crawl is serialized once, at the end of the run, as a single
//! pretty-printed JSON array of records. serde_json writes 2-space indent
//! and leaves non-ASCII characters unescaped, so accented names and quotes
//! survive byte-for-byte.

use crate::models::ArticleRecord;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write the record set to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization, directory creation, or the file write
/// fails. This is the one failure the process does not swallow.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_records(records: &[ArticleRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    info!(count = records.len(), "Writing JSON");
    fs::write(path, json).await?;
    info!("Wrote article JSON file");

    Ok(())
}
