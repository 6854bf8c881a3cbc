//! Data model for scraped Guardian articles.
//!
//! A single entity lives here: [`ArticleRecord`], one instance per
//! successfully parsed article. Records are appended to an in-memory list in
//! crawl order, serialized once at the end of the run, and never mutated
//! after creation.
//!
//! The serde renames match the field names of the output JSON schema
//! consumed by the `show` subcommand and downstream tooling: `Title`,
//! `Newspaper`, `URL`, `Publication Date`, `Authors`, `Full Text`.

use serde::{Deserialize, Serialize};

/// Name written into every record's `Newspaper` field.
pub const NEWSPAPER: &str = "The Guardian";

/// One scraped article with its extracted fields.
///
/// All fields are free-form strings. Missing page elements produce empty
/// strings rather than absent keys, so every record carries the full schema.
///
/// # Fields
///
/// * `title` - Text of the article's top-level heading, or `""`.
/// * `newspaper` - Always [`NEWSPAPER`].
/// * `url` - The article permalink the record was scraped from.
/// * `publication_date` - Dateline text; may contain both a "Last modified"
///   phrase and the original publication date.
/// * `authors` - Byline names joined with `", "`, or `""` if none found.
/// * `full_text` - Body paragraphs joined by blank lines.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Newspaper")]
    pub newspaper: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Authors")]
    pub authors: String,
    #[serde(rename = "Full Text")]
    pub full_text: String,
}
