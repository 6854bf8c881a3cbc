//! Crawl driver.
//!
//! Walks the configured date range one day at a time, asks the scraper for
//! that day's article links, parses each article sequentially, and
//! accumulates the records. Fully sequential by design: one request in
//! flight at a time, with a fixed pause between article fetches to bound the
//! request rate.
//!
//! The article cap is enforced before every article fetch and again between
//! days, so once it is reached no further request of any kind is issued.

use crate::archive::{archive_days, day_url};
use crate::cli::CrawlArgs;
use crate::models::ArticleRecord;
use crate::scrapers::ArticleSource;
use crate::utils::truncate_for_log;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Run the crawl and return the accumulated records, in crawl order.
///
/// A day whose archive fetch fails contributes zero records and the crawl
/// moves on; an article whose fetch fails is skipped the same way. The
/// final count is whatever was actually collected, which may be well below
/// `max_articles`.
pub async fn run<S: ArticleSource>(source: &S, args: &CrawlArgs) -> Vec<ArticleRecord> {
    let mut records: Vec<ArticleRecord> = Vec::new();
    let delay = Duration::from_millis(args.delay_ms);

    'days: for date in archive_days(args.start_year, args.end_year) {
        let url = day_url(&args.base_url, &args.section, date);
        info!(%url, "Fetching archive day");
        let links = source.article_links(&url).await;

        for link in links {
            if records.len() >= args.max_articles {
                break 'days;
            }
            if let Some(record) = source.parse_article(&link).await {
                info!(
                    count = records.len() + 1,
                    title = %truncate_for_log(&record.title, 90),
                    "Scraped article"
                );
                records.push(record);
            }
            sleep(delay).await;
        }

        // keeps the next day's archive fetch from being issued when the cap
        // lands exactly on a day's last link
        if records.len() >= args.max_articles {
            break;
        }
    }

    info!(count = records.len(), "Crawl finished");
    records
}
