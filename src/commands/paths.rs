//! Enumerate listing pages to pre-render

use anyhow::Result;

use crate::pagination::{page_params, PageParams};
use crate::Blog;

/// Route parameters for every listing page of the site
pub fn collect(blog: &Blog) -> Result<Vec<PageParams>> {
    let index = blog.index()?;
    Ok(page_params(index.len(), blog.config.per_page))
}

/// Print the page enumeration
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let params = collect(blog)?;

    if json {
        let routes: Vec<_> = params
            .iter()
            .map(|p| serde_json::json!({ "params": p }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    println!("Pages ({}):", params.len());
    for p in &params {
        let number: usize = p.number.parse()?;
        println!("  {} -> {}", p.number, blog.config.page_url(number));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_counts_indexed_posts() {
        let site = tempfile::tempdir().unwrap();
        fs::write(site.path().join("_config.yml"), "per_page: 2\n").unwrap();
        let posts = site.path().join("posts");
        fs::create_dir_all(&posts).unwrap();
        for i in 1..=5 {
            fs::write(
                posts.join(format!("p{}.md", i)),
                format!("---\ndate: 2024-01-0{}\n---\n", i),
            )
            .unwrap();
        }
        fs::write(posts.join("undated.md"), "no date").unwrap();

        let blog = Blog::new(site.path()).unwrap();
        let numbers: Vec<_> = collect(&blog)
            .unwrap()
            .into_iter()
            .map(|p| p.number)
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }
}
