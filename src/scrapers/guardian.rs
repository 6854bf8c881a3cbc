//! Guardian article scraper.
//!
//! Discovers article permalinks on the daily archive pages (the `/all`
//! indexes) and extracts title, dateline, byline, and body text from the
//! article pages themselves.
//!
//! # URL Pattern
//!
//! Article permalinks are dated, e.g.
//! `https://www.theguardian.com/us-news/2024/jul/01/some-story-slug`.
//! Archive pages also link to non-article pages sharing that shape: the
//! `/all` and `/altdate` index pages, `-live-updates` and `-video` pages,
//! and `/live/` liveblogs. Those are filtered out during indexing.
//!
//! # Markup
//!
//! The field selectors target the Guardian's current markup: the dateline
//! carries a fixed inline style, bylines are `a[rel="author"]` anchors with a
//! single-container fallback, and the body lives in a well-known wrapper
//! class containing promotional asides and an email-signup paragraph that
//! must not leak into the extracted text.

use crate::models::{ArticleRecord, NEWSPAPER};
use crate::scrapers::ArticleSource;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

const USER_AGENT: &str = concat!("guardian_archive_scraper/", env!("CARGO_PKG_VERSION"));

/// Permalink suffixes that denote index or non-article pages.
const EXCLUDED_SUFFIXES: [&str; 4] = ["/all", "/altdate", "-live-updates", "-video"];
/// Path segment used by Guardian liveblogs.
const LIVEBLOG_SEGMENT: &str = "/live/";
/// id of the email-signup skip link embedded in article bodies.
const EMAIL_SIGNUP_ID: &str = "EmailSignup-skip-link-9";

static ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static DATELINE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[style="--mobile-colour:var(--dateline)"]"#).unwrap());
static BYLINE_ANCHORS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[rel="author"]"#).unwrap());
static BYLINE_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.dcr-16bbvim").unwrap());
static ARTICLE_BODY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article-body-commercial-selector").unwrap());
static PARAGRAPHS: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// HTTP access to one Guardian site.
///
/// Holds the shared [`Client`] (bounded per-request timeout, identifying
/// User-Agent), the base URL that relative hrefs are resolved against, and
/// the compiled permalink pattern for that base.
pub struct GuardianScraper {
    client: Client,
    base: Url,
    permalink: Regex,
}

impl GuardianScraper {
    /// Build a scraper for `base_url` with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let base = Url::parse(base_url)?;
        let permalink = article_permalink_pattern(base_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base,
            permalink,
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        resp.text().await
    }
}

impl ArticleSource for GuardianScraper {
    /// Fetch one archive-day page and return the article permalinks on it.
    ///
    /// Duplicate hrefs (headline, thumbnail, related-story links) are
    /// collapsed; result order is not significant. Any network or HTTP
    /// failure is logged and yields an empty vector, so a missing day never
    /// aborts the crawl.
    #[instrument(level = "info", skip_all, fields(url = %day_url))]
    async fn article_links(&self, day_url: &str) -> Vec<String> {
        let html = match self.fetch(day_url).await {
            Ok(html) => html,
            Err(e) => {
                error!(error = %e, url = %day_url, "Could not fetch archive page");
                return Vec::new();
            }
        };
        let links = extract_article_links(&html, &self.base, &self.permalink);
        info!(count = links.len(), "Indexed article links");
        debug!(links = ?links, "Archive day links");
        links
    }

    /// Fetch and parse a single article.
    ///
    /// Returns `None` when the fetch itself fails (logged and skipped by the
    /// caller). A page that fetches but is missing expected elements still
    /// produces a record, with the affected fields empty.
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn parse_article(&self, url: &str) -> Option<ArticleRecord> {
        let html = match self.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                error!(error = %e, %url, "Could not fetch article");
                return None;
            }
        };
        Some(parse_article_html(&html, url))
    }
}

/// Compile the dated-permalink pattern for a site base URL:
/// `<base>/<section-path>/<4-digit-year>/<3-letter-month>/<2-digit-day>/<slug>`.
fn article_permalink_pattern(base_url: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"^{}/.+/\d{{4}}/[a-z]{{3}}/\d{{2}}/.+",
        regex::escape(base_url.trim_end_matches('/'))
    ))
}

/// Pull every article permalink out of an archive page's HTML.
///
/// Relative hrefs are resolved against `base` before matching, so both
/// absolute and site-relative anchors are recognized. Links matching the
/// permalink shape are kept unless they end in one of the excluded suffixes
/// or contain the liveblog path segment.
pub fn extract_article_links(html: &str, base: &Url, permalink: &Regex) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = HashSet::new();
    for anchor in document.select(&ANCHORS) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        let link = resolved.to_string();
        if !permalink.is_match(&link) {
            continue;
        }
        if EXCLUDED_SUFFIXES.iter().any(|s| link.ends_with(s)) {
            continue;
        }
        if link.contains(LIVEBLOG_SEGMENT) {
            continue;
        }
        links.insert(link);
    }
    links.into_iter().collect()
}

/// Extract all record fields from an article page's HTML.
pub fn parse_article_html(html: &str, url: &str) -> ArticleRecord {
    let document = Html::parse_document(html);
    ArticleRecord {
        title: extract_title(&document),
        newspaper: NEWSPAPER.to_string(),
        url: url.to_string(),
        publication_date: extract_dateline(&document),
        authors: extract_authors(&document),
        full_text: extract_body(&document),
    }
}

fn extract_title(document: &Html) -> String {
    document
        .select(&HEADLINE)
        .next()
        .map(|h| h.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Dateline text. Text nodes are joined with a single space so the "Last
/// modified on ..." phrase and the original publication date stay separated.
fn extract_dateline(document: &Html) -> String {
    document
        .select(&DATELINE)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .unwrap_or_default()
}

/// A byline extraction strategy: returns the author names it found, empty if
/// the markup variant it targets is absent.
type AuthorStrategy = fn(&Html) -> Vec<String>;

/// Tried in order; the first strategy returning any names wins. New markup
/// variants slot in as additional entries.
const AUTHOR_STRATEGIES: &[AuthorStrategy] = &[byline_anchor_authors, byline_container_author];

fn extract_authors(document: &Html) -> String {
    AUTHOR_STRATEGIES
        .iter()
        .map(|strategy| strategy(document))
        .find(|names| !names.is_empty())
        .map(|names| names.join(", "))
        .unwrap_or_default()
}

/// Primary byline variant: one anchor per author.
fn byline_anchor_authors(document: &Html) -> Vec<String> {
    document
        .select(&BYLINE_ANCHORS)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Fallback variant: a single container holding the whole byline.
fn byline_container_author(document: &Html) -> Vec<String> {
    document
        .select(&BYLINE_CONTAINER)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .into_iter()
        .collect()
}

/// Body paragraphs joined by blank lines, with boilerplate subtrees
/// (promotional asides, the email-signup skip link) excluded.
///
/// `scraper`'s DOM is immutable, so instead of removing the boilerplate
/// nodes before extraction, paragraphs under them are skipped by ancestry.
fn extract_body(document: &Html) -> String {
    let Some(body) = document.select(&ARTICLE_BODY).next() else {
        return String::new();
    };
    body.select(&PARAGRAPHS)
        .filter(|p| p.value().id() != Some(EMAIL_SIGNUP_ID))
        .filter(|p| !inside_promo_aside(*p))
        .map(|p| p.text().collect::<String>().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn inside_promo_aside(p: ElementRef) -> bool {
    p.ancestors().filter_map(ElementRef::wrap).any(|el| {
        el.value().name() == "aside" && el.value().classes().any(|class| class == "dcr-av5vqf")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.theguardian.com").unwrap()
    }

    fn pattern() -> Regex {
        article_permalink_pattern("https://www.theguardian.com").unwrap()
    }

    #[test]
    fn test_extract_links_filters_non_articles() {
        let html = r#"
            <html><body>
            <a href="/us-news/2024/jul/01/story-a">Story A</a>
            <a href="/us-news/2024/jul/01/story-a-live-updates">Live updates</a>
            <a href="/us-news/2024/jul/01/all">All stories</a>
            <a href="/us-news/2024/jul/01/story-b-video">Video</a>
            </body></html>
        "#;
        let links = extract_article_links(html, &base(), &pattern());
        assert_eq!(
            links,
            vec!["https://www.theguardian.com/us-news/2024/jul/01/story-a".to_string()]
        );
    }

    #[test]
    fn test_extract_links_rejects_liveblogs_and_foreign_hosts() {
        let html = r#"
            <a href="https://www.theguardian.com/world/live/2024/jul/01/election-liveblog">blog</a>
            <a href="https://www.theguardian.com/us-news/2024/jul/01/altdate">alt</a>
            <a href="https://example.org/us-news/2024/jul/01/elsewhere">foreign</a>
            <a href="https://www.theguardian.com/about">undated</a>
        "#;
        let links = extract_article_links(html, &base(), &pattern());
        assert!(links.is_empty());
    }

    #[test]
    fn test_extract_links_deduplicates() {
        // headline and thumbnail link to the same story
        let html = r#"
            <a href="/football/2024/jul/01/final-report"><h3>Final report</h3></a>
            <a href="/football/2024/jul/01/final-report"><img src="thumb.jpg"></a>
            <a href="https://www.theguardian.com/football/2024/jul/01/final-report">again</a>
        "#;
        let links = extract_article_links(html, &base(), &pattern());
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0],
            "https://www.theguardian.com/football/2024/jul/01/final-report"
        );
    }

    #[test]
    fn test_parse_article_full_page() {
        let html = r#"
            <html><body>
            <h1>  Storm batters coast  </h1>
            <div style="--mobile-colour:var(--dateline)"><span>Last modified on Mon 1 Jul 2024</span><span>Mon 1 Jul 2024 06.00 EDT</span></div>
            <a rel="author" href="/profile/jane-doe">Jane Doe</a>
            <a rel="author" href="/profile/john-roe">John Roe</a>
            <div class="article-body-commercial-selector">
              <p>First paragraph.</p>
              <aside class="dcr-av5vqf"><p>Sign up for our newsletter!</p></aside>
              <p id="EmailSignup-skip-link-9">after newsletter promotion</p>
              <p>Second paragraph.</p>
            </div>
            </body></html>
        "#;
        let record =
            parse_article_html(html, "https://www.theguardian.com/us-news/2024/jul/01/storm");
        assert_eq!(record.title, "Storm batters coast");
        assert_eq!(record.newspaper, NEWSPAPER);
        assert_eq!(
            record.publication_date,
            "Last modified on Mon 1 Jul 2024 Mon 1 Jul 2024 06.00 EDT"
        );
        assert_eq!(record.authors, "Jane Doe, John Roe");
        assert_eq!(record.full_text, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_parse_article_author_fallback_container() {
        let html = r#"
            <h1>Quiet day</h1>
            <div class="dcr-16bbvim">Jane Doe</div>
            <div class="article-body-commercial-selector"><p>Body.</p></div>
        "#;
        let record = parse_article_html(html, "https://www.theguardian.com/x/2024/jul/01/quiet");
        assert_eq!(record.authors, "Jane Doe");
    }

    #[test]
    fn test_parse_article_primary_byline_wins_over_fallback() {
        let html = r#"
            <a rel="author">Jane Doe</a>
            <div class="dcr-16bbvim">Agency Staff</div>
        "#;
        let record = parse_article_html(html, "https://www.theguardian.com/x/2024/jul/01/s");
        assert_eq!(record.authors, "Jane Doe");
    }

    #[test]
    fn test_parse_article_missing_elements_yield_empty_fields() {
        let record = parse_article_html(
            "<html><body><div>nothing useful</div></body></html>",
            "https://www.theguardian.com/x/2024/jul/01/bare",
        );
        assert_eq!(record.title, "");
        assert_eq!(record.publication_date, "");
        assert_eq!(record.authors, "");
        assert_eq!(record.full_text, "");
        assert_eq!(record.url, "https://www.theguardian.com/x/2024/jul/01/bare");
        assert_eq!(record.newspaper, NEWSPAPER);
    }

    #[test]
    fn test_extract_body_skips_nested_promo_paragraphs() {
        let html = r#"
            <div class="article-body-commercial-selector">
              <p>Kept.</p>
              <aside class="dcr-av5vqf"><div><p>Deeply nested promo.</p></div></aside>
              <aside class="other"><p>Kept aside.</p></aside>
            </div>
        "#;
        let record = parse_article_html(html, "https://www.theguardian.com/x/2024/jul/01/s");
        assert_eq!(record.full_text, "Kept.\n\nKept aside.");
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_links_and_absent_record() {
        // nothing listens on the discard port; both calls fail fast and
        // collapse per the non-fatal contract
        let scraper =
            GuardianScraper::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let links = scraper
            .article_links("http://127.0.0.1:9/us-news/2024/jul/01/all")
            .await;
        assert!(links.is_empty());
        let record = scraper
            .parse_article("http://127.0.0.1:9/us-news/2024/jul/01/story")
            .await;
        assert!(record.is_none());
    }

    #[test]
    fn test_permalink_pattern_requires_date_shape() {
        let re = pattern();
        assert!(re.is_match("https://www.theguardian.com/us-news/2024/jul/01/story"));
        assert!(re.is_match("https://www.theguardian.com/world/ukraine/2025/jan/09/story"));
        assert!(!re.is_match("https://www.theguardian.com/us-news/story"));
        assert!(!re.is_match("https://www.theguardian.com/us-news/2024/july/01/story"));
        assert!(!re.is_match("https://other.example/us-news/2024/jul/01/story"));
    }
}
