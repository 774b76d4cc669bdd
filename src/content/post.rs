//! Raw post records

use serde::{Deserialize, Serialize};

/// An unprocessed post as read from the content source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPost {
    /// Post title
    pub title: String,

    /// Short summary shown in listings
    pub description: String,

    /// Canonical path to the full post
    pub url: String,

    /// Listing image
    pub thumbnail: Option<String>,

    /// Publication date, unparsed
    pub date: String,

    /// Rendered leading snippet
    pub excerpt: Option<String>,

    pub categories: Vec<String>,

    pub keywords: Vec<String>,

    /// Source file path relative to the site directory
    pub source: String,
}

impl RawPost {
    /// Create a record with the fields every listing needs
    pub fn new(title: &str, url: &str, date: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            date: date.to_string(),
            source: url.to_string(),
            ..Default::default()
        }
    }
}
