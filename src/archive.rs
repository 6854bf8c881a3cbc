//! Archive-day URL construction and date-range iteration.
//!
//! The Guardian publishes one index page per section per calendar day, e.g.
//! `https://www.theguardian.com/us-news/2024/jul/01/all`. This module builds
//! those URLs and yields the dates to crawl as a single lazy iterator, so the
//! driver consumes `(date after date)` with its own stop condition instead of
//! breaking out of nested year/month/day loops.
//!
//! Calendar-invalid combinations (day 31 of a 30-day month, Feb 30, ...) are
//! filtered out here via `NaiveDate`, so no HTTP request is ever issued for a
//! date that cannot exist.

use chrono::{Datelike, NaiveDate};

/// Lowercase 3-letter month names as used in Guardian permalinks.
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Build the archive index URL for one section-day.
///
/// # Arguments
///
/// * `base` - Site base URL without a trailing slash, e.g. `https://www.theguardian.com`
/// * `section` - Section path segment, e.g. `us-news` or `football`
/// * `date` - The calendar day to index
///
/// # Returns
///
/// A URL of the form `<base>/<section>/<year>/<mon>/<dd>/all`.
pub fn day_url(base: &str, section: &str, date: NaiveDate) -> String {
    format!(
        "{}/{}/{}/{}/{:02}/all",
        base,
        section,
        date.year(),
        MONTHS[date.month0() as usize],
        date.day()
    )
}

/// Iterate every valid calendar day from January 1 of `start_year` through
/// December 31 of `end_year`, in ascending order.
///
/// Yields `NaiveDate` values lazily; the caller stops consuming whenever its
/// article cap is reached.
pub fn archive_days(start_year: i32, end_year: i32) -> impl Iterator<Item = NaiveDate> {
    (start_year..=end_year).flat_map(|year| {
        (1u32..=12).flat_map(move |month| {
            (1u32..=31).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
        })
    })
}
