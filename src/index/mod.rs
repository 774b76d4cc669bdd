//! Post index - date-ordered summaries built from raw post records
//!
//! The index never reads files itself: callers hand it records already
//! materialized by a content source (see [`crate::content::loader`]).

mod date;

use serde::{Deserialize, Serialize};

use crate::content::RawPost;
use crate::error::IndexError;

pub use date::{is_valid_format, parse_date, DEFAULT_DATE_FORMAT};

/// Sort key and display text of a post date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDate {
    /// Milliseconds since the Unix epoch
    #[serde(rename = "time")]
    pub timestamp: i64,

    /// Human-readable rendering, display only
    #[serde(rename = "string")]
    pub display: String,
}

/// A post as shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub date: PostDate,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl PostSummary {
    /// Project a raw record, rendering the date with `date_format`
    pub fn from_raw(raw: &RawPost, date_format: &str) -> Result<Self, IndexError> {
        let date_format = if is_valid_format(date_format) {
            date_format
        } else {
            tracing::warn!(
                "Invalid date_format {:?}, using {:?}",
                date_format,
                DEFAULT_DATE_FORMAT
            );
            DEFAULT_DATE_FORMAT
        };
        let parsed = parse_date(&raw.date).ok_or_else(|| IndexError::InvalidDate {
            source_path: raw.source.clone(),
            value: raw.date.clone(),
        })?;

        Ok(Self {
            title: raw.title.clone(),
            description: raw.description.clone(),
            url: raw.url.clone(),
            thumbnail: raw.thumbnail.clone(),
            date: PostDate {
                timestamp: parsed.timestamp_millis(),
                display: parsed.format(date_format).to_string(),
            },
            excerpt: raw.excerpt.clone(),
            categories: raw.categories.clone(),
            keywords: raw.keywords.clone(),
        })
    }
}

/// Builds the ordered index with a given date display format
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    date_format: String,
}

impl IndexBuilder {
    /// Create a builder; an unusable format falls back to [`DEFAULT_DATE_FORMAT`]
    pub fn new(date_format: &str) -> Self {
        let date_format = if is_valid_format(date_format) {
            date_format.to_string()
        } else {
            tracing::warn!(
                "Invalid date_format {:?}, using {:?}",
                date_format,
                DEFAULT_DATE_FORMAT
            );
            DEFAULT_DATE_FORMAT.to_string()
        };
        Self { date_format }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Build the index, skipping records whose date cannot be parsed
    pub fn build(&self, raw: &[RawPost]) -> Vec<PostSummary> {
        let (summaries, rejects) = self.build_with_rejects(raw);
        for err in &rejects {
            tracing::warn!("Skipping post: {}", err);
        }
        summaries
    }

    /// Build the index and also return the error of every skipped record
    pub fn build_with_rejects(&self, raw: &[RawPost]) -> (Vec<PostSummary>, Vec<IndexError>) {
        let mut summaries = Vec::with_capacity(raw.len());
        let mut rejects = Vec::new();

        for post in raw {
            match PostSummary::from_raw(post, &self.date_format) {
                Ok(summary) => summaries.push(summary),
                Err(e) => rejects.push(e),
            }
        }

        // Newest first; stable, so equal timestamps keep input order
        summaries.sort_by(|a, b| b.date.timestamp.cmp(&a.date.timestamp));

        tracing::debug!(
            "Indexed {} posts ({} skipped)",
            summaries.len(),
            rejects.len()
        );
        (summaries, rejects)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Build the date-ordered index with the default date display
pub fn build_index(raw: &[RawPost]) -> Vec<PostSummary> {
    IndexBuilder::default().build(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, date: &str) -> RawPost {
        RawPost::new(title, &format!("/posts/{}.html", title), date)
    }

    #[test]
    fn test_sorted_newest_first() {
        let posts = vec![
            raw("old", "2019-01-01"),
            raw("new", "2024-06-30T08:00:00Z"),
            raw("mid", "2021/05/04 12:00"),
        ];
        let index = build_index(&posts);
        let titles: Vec<_> = index.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
        assert!(index
            .windows(2)
            .all(|w| w[0].date.timestamp >= w[1].date.timestamp));
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let posts = vec![
            raw("first", "2023-03-03"),
            raw("newest", "2024-01-01"),
            raw("second", "2023-03-03"),
            raw("third", "2023-03-03T00:00:00Z"),
        ];
        let titles: Vec<_> = build_index(&posts)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["newest", "first", "second", "third"]);
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let posts = vec![
            raw("good", "2022-02-02"),
            raw("bad", "not a date"),
            raw("missing", ""),
            raw("also-good", "2020-02-02"),
        ];
        let (index, rejects) = IndexBuilder::default().build_with_rejects(&posts);
        assert_eq!(index.len(), posts.len() - 2);
        assert_eq!(
            rejects[0],
            IndexError::InvalidDate {
                source_path: "/posts/bad.html".to_string(),
                value: "not a date".to_string(),
            }
        );
        assert_eq!(build_index(&posts).len(), 2);
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let mut post = raw("copy", "2019-12-23T09:51:18.869Z");
        post.description = "A description".to_string();
        post.thumbnail = Some("/img/x.png".to_string());
        post.excerpt = Some("<p>Lead</p>\n".to_string());
        post.categories = vec!["Redis".to_string()];

        let summary = PostSummary::from_raw(&post, DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(summary.title, "copy");
        assert_eq!(summary.description, "A description");
        assert_eq!(summary.url, "/posts/copy.html");
        assert_eq!(summary.thumbnail.as_deref(), Some("/img/x.png"));
        assert_eq!(summary.excerpt.as_deref(), Some("<p>Lead</p>\n"));
        assert_eq!(summary.categories, vec!["Redis"]);
        assert_eq!(summary.date.timestamp, 1_577_094_678_869);
        assert_eq!(summary.date.display, "December 23, 2019");
    }

    #[test]
    fn test_raw_records_untouched() {
        let posts = vec![raw("b", "2020-01-01"), raw("a", "2021-01-01")];
        let before = posts.clone();
        let _ = build_index(&posts);
        assert_eq!(posts, before);
    }

    #[test]
    fn test_custom_and_invalid_format() {
        let posts = vec![raw("x", "2024-01-15")];
        let index = IndexBuilder::new("%Y-%m-%d").build(&posts);
        assert_eq!(index[0].date.display, "2024-01-15");

        let fallback = IndexBuilder::new("%Q");
        assert_eq!(fallback.date_format(), DEFAULT_DATE_FORMAT);
        assert_eq!(fallback.build(&posts)[0].date.display, "January 15, 2024");
    }

    #[test]
    fn test_from_raw_invalid_format_falls_back() {
        let summary = PostSummary::from_raw(&raw("f", "2024-01-15"), "%Q %Y").unwrap();
        assert_eq!(summary.date.display, "January 15, 2024");
    }

    #[test]
    fn test_date_serializes_like_site_data() {
        let summary = PostSummary::from_raw(&raw("s", "2024-01-15"), "%Y").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["date"]["time"], 1_705_276_800_000i64);
        assert_eq!(json["date"]["string"], "2024");
    }
}
