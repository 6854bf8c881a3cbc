//! Site scrapers for discovering and parsing articles.
//!
//! One submodule per source. Each scraper follows the same two-phase
//! pattern:
//!
//! 1. **Indexing**: Discover article permalinks from a section's daily
//!    archive page
//! 2. **Parsing**: Download an article page and extract its structured
//!    fields
//!
//! Scrapers never fail the crawl: a fetch error is logged with the offending
//! URL and collapses to an empty link list or an absent record, which the
//! crawl driver treats as "nothing found here".

use crate::models::ArticleRecord;

pub mod guardian;

/// The two operations the crawl driver needs from a scraper.
///
/// Both are total: failures surface as an empty link list or an absent
/// record, never as an error.
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    /// Article permalinks found on one archive-day page.
    async fn article_links(&self, day_url: &str) -> Vec<String>;

    /// Parsed record for one article, or `None` when the fetch failed.
    async fn parse_article(&self, url: &str) -> Option<ArticleRecord>;
}
