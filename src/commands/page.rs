//! Show one listing page

use anyhow::Result;

use crate::pagination::paginate;
use crate::Blog;

/// Print listing page `number` (1-based)
pub fn run(blog: &Blog, number: usize, json: bool) -> Result<()> {
    let index = blog.index()?;
    let pages = paginate(&index, blog.config.per_page)?;
    let page = pages.get(number)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!(
        "Page {} of {} ({})",
        page.current,
        page.total_pages,
        blog.config.full_url(&blog.config.page_url(page.current))
    );
    for post in page.items {
        println!("  {} - {}", post.date.display, post.title);
        if !post.description.is_empty() {
            println!("      {}", post.description);
        }
    }
    if let Some(prev) = page.previous {
        println!("Previous: {}", blog.config.page_url(prev));
    }
    if let Some(next) = page.next {
        println!("Next: {}", blog.config.page_url(next));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_page_out_of_range_is_an_error() {
        let site = tempfile::tempdir().unwrap();
        let posts = site.path().join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("one.md"), "---\ntitle: One\ndate: 2024-01-01\n---\n").unwrap();

        let blog = Blog::new(site.path()).unwrap();
        assert!(run(&blog, 1, false).is_ok());

        let err = run(&blog, 2, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::PaginationError>(),
            Some(&crate::PaginationError::PageOutOfRange {
                requested: 2,
                total: 1
            })
        );
    }
}
