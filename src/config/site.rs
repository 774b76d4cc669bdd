//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // URL
    pub url: String,
    pub root: String,
    /// Drop the `.html` suffix from post URLs
    pub clean_urls: bool,

    // Directory
    pub posts_dir: String,

    // Writing
    /// Line that ends the excerpt of a post
    pub excerpt_separator: String,

    // Date format (chrono strftime syntax)
    pub date_format: String,

    // Pagination
    pub per_page: usize,
    pub pagination_dir: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            clean_urls: false,

            posts_dir: "posts".to_string(),

            excerpt_separator: "---".to_string(),

            date_format: "%B %-d, %Y".to_string(),

            per_page: 5,
            pagination_dir: "page".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        if config.per_page == 0 {
            anyhow::bail!("per_page must be greater than zero");
        }
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Root-relative URL of a post file stem, e.g. `/posts/hello.html`
    pub fn post_url(&self, stem: &str) -> String {
        let suffix = if self.clean_urls { "" } else { ".html" };
        format!(
            "{}{}/{}{}",
            self.root,
            self.posts_dir.trim_matches('/'),
            stem,
            suffix
        )
    }

    /// Absolute URL of a root-relative path
    pub fn full_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Root-relative URL of a listing page
    pub fn page_url(&self, number: usize) -> String {
        if number <= 1 {
            self.root.clone()
        } else {
            format!(
                "{}{}/{}/",
                self.root,
                self.pagination_dir.trim_matches('/'),
                number
            )
        }
    }
}
