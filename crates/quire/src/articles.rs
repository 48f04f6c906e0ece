//! Article listings: the data blog index pages are built from.
//!
//! [`load_articles()`] loads every article under `articles/`, keeps the fields listing pages need and sorts them from most to least recent.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::content::{ContentData, ContentLoader};
use crate::errors::ContentError;
use crate::options::LoaderOptions;

/// Pattern articles are globbed with, relative to [`LoaderOptions::src_dir`].
pub const ARTICLES_PATTERN: &str = "articles/*.md";

/// Frontmatter every article must declare.
#[derive(Deserialize, Debug, Clone)]
pub struct ArticleFrontmatter {
    pub title: String,
    pub date: String,
}

/// Display-ready summary of a single article.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub date: ArticleDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ArticleDate {
    /// Milliseconds since the Unix epoch, at noon UTC.
    pub time: i64,
    /// e.g. `January 22, 2010`.
    pub string: String,
}

/// Loads every article of the site, most recent first.
///
/// ## Example
/// ```rs
/// use quire::{load_articles, LoaderOptions};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///   for article in load_articles(&LoaderOptions::default())? {
///     println!("{} ({})", article.title, article.date.string);
///   }
///   Ok(())
/// }
/// ```
pub fn load_articles(options: &LoaderOptions) -> Result<Vec<Article>, ContentError> {
    ContentLoader::new(ARTICLES_PATTERN)
        .excerpt(true)
        .load_with(options, summarize)
}

/// Turns loaded documents into [`Article`]s sorted by descending date.
///
/// Articles sharing the same date keep the order they were given in.
pub fn summarize(
    documents: Vec<ContentData<ArticleFrontmatter>>,
) -> Result<Vec<Article>, ContentError> {
    let mut articles = documents
        .into_iter()
        .map(|document| {
            let date = format_date(&document.frontmatter.date).ok_or_else(|| {
                ContentError::InvalidDate {
                    url: document.url.clone(),
                    value: document.frontmatter.date.clone(),
                }
            })?;

            Ok(Article {
                title: document.frontmatter.title,
                url: document.url,
                date,
                excerpt: document.excerpt,
            })
        })
        .collect::<Result<Vec<_>, ContentError>>()?;

    articles.sort_by(|a, b| b.date.time.cmp(&a.date.time));

    Ok(articles)
}

/// Parses a frontmatter date and moves it to noon UTC, so that the calendar day survives being displayed in any timezone.
///
/// Returns `None` if `raw` is not a recognized date.
pub fn format_date(raw: &str) -> Option<ArticleDate> {
    let date = parse_date(raw)?.with_hour(12)?;

    Some(ArticleDate {
        time: date.timestamp_millis(),
        string: date.format("%B %-d, %Y").to_string(),
    })
}

/// Accepts `2010-01-22`, RFC 3339 timestamps, naive timestamps (read as UTC) and `January 22, 2010`.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.and_utc());
        }
    }

    for format in ["%Y-%m-%d", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
        }
    }

    None
}
