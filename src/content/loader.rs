//! Content loader - reads raw post records from the posts directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ExcerptRenderer, FrontMatter, RawPost};
use crate::Blog;

/// Loads raw posts from `<base>/<posts_dir>/*.md`
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    excerpts: ExcerptRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let excerpts = ExcerptRenderer::new(&blog.config.excerpt_separator);
        Self { blog, excerpts }
    }

    /// Load every post file, in file name order
    ///
    /// Files that cannot be read are skipped with a warning.
    pub fn load_posts(&self) -> Result<Vec<RawPost>> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.load_post(path) {
                Ok(post) => posts.push(post),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        tracing::debug!("Read {} post files from {:?}", posts.len(), posts_dir);
        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<RawPost> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let source = path
            .strip_prefix(&self.blog.base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        Ok(RawPost {
            title: fm.title.unwrap_or_else(|| stem.to_string()),
            description: fm.description.unwrap_or_default(),
            url: self.blog.config.post_url(stem),
            thumbnail: fm.thumbnail,
            date: fm.date.unwrap_or_default(),
            excerpt: self.excerpts.excerpt(body),
            categories: fm.categories,
            keywords: fm.keywords,
            source,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_posts() {
        let site = tempfile::tempdir().unwrap();
        let posts_dir = site.path().join("posts");
        fs::create_dir_all(posts_dir.join("drafts")).unwrap();

        write(
            &posts_dir,
            "signalr-core.md",
            "---\ntitle: SignalR Core\ndescription: Heartbeats\ndate: 2019-12-23T09:51:18.869Z\nthumbnail: /img/a.png\ncategories: ASP.NET,Redis\n---\n\nFirst paragraph.\n\n---\n\nThe rest.\n",
        );
        write(&posts_dir, "no-front-matter.md", "Just text.\n");
        write(&posts_dir, "notes.txt", "ignored");
        write(
            &posts_dir.join("drafts"),
            "nested.md",
            "---\ntitle: Nested\n---\n",
        );

        let blog = Blog::new(site.path()).unwrap();
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 2);

        let untitled = &posts[0];
        assert_eq!(untitled.title, "no-front-matter");
        assert_eq!(untitled.date, "");
        assert_eq!(untitled.excerpt, None);

        let post = &posts[1];
        assert_eq!(post.title, "SignalR Core");
        assert_eq!(post.description, "Heartbeats");
        assert_eq!(post.url, "/posts/signalr-core.html");
        assert_eq!(post.thumbnail.as_deref(), Some("/img/a.png"));
        assert_eq!(post.date, "2019-12-23T09:51:18.869Z");
        assert_eq!(post.excerpt.as_deref(), Some("<p>First paragraph.</p>\n"));
        assert_eq!(post.categories, vec!["ASP.NET", "Redis"]);
        assert_eq!(
            Path::new(&post.source),
            Path::new("posts").join("signalr-core.md")
        );
    }

    #[test]
    fn test_missing_posts_dir() {
        let site = tempfile::tempdir().unwrap();
        let blog = Blog::new(site.path()).unwrap();
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_front_matter_is_skipped() {
        let site = tempfile::tempdir().unwrap();
        let posts_dir = site.path().join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        write(&posts_dir, "broken.md", "{\"title\": }\nbody");
        write(&posts_dir, "fine.md", "---\ntitle: Fine\n---\n");

        let blog = Blog::new(site.path()).unwrap();
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Fine");
    }
}
