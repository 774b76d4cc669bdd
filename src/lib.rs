//! blog-index: date-ordered post index and pagination for a static blog
//!
//! Raw post records are read from the posts directory, normalized into
//! [`index::PostSummary`] values sorted newest first, and sliced into
//! fixed-size listing pages by [`pagination::paginate`].

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod index;
pub mod pagination;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::RawPost;
pub use error::{IndexError, PaginationError};
pub use index::{build_index, IndexBuilder, PostDate, PostSummary};
pub use pagination::{page_params, paginate, Page, PageParams, PageSet};

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post files
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Read every raw post record from the posts directory
    pub fn load_posts(&self) -> Result<Vec<RawPost>> {
        content::loader::ContentLoader::new(self).load_posts()
    }

    /// Build the newest-first index of the site's posts
    pub fn index(&self) -> Result<Vec<PostSummary>> {
        let raw = self.load_posts()?;
        let index = IndexBuilder::new(&self.config.date_format).build(&raw);
        tracing::info!("Indexed {} of {} posts", index.len(), raw.len());
        Ok(index)
    }
}
