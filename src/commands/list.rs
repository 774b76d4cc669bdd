//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::index::{IndexBuilder, PostSummary};
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    let raw = blog.load_posts()?;
    let builder = IndexBuilder::new(&blog.config.date_format);
    let (posts, rejects) = builder.build_with_rejects(&raw);

    match content_type {
        "post" | "posts" => {
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("{}", site_heading(&blog.config));
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!("  {} - {} [{}]", post.date.display, post.title, post.url);
            }
        }
        "category" | "categories" => {
            print_counts("Categories", count_by(&posts, |p| &p.categories), json)?;
        }
        "keyword" | "keywords" => {
            print_counts("Keywords", count_by(&posts, |p| &p.keywords), json)?;
        }
        "invalid" => {
            if json {
                let errors: Vec<String> = rejects.iter().map(|e| e.to_string()).collect();
                println!("{}", serde_json::to_string_pretty(&errors)?);
                return Ok(());
            }
            println!("Posts with invalid dates ({}):", rejects.len());
            for err in &rejects {
                println!("  {}", err);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, keyword, invalid",
                content_type
            );
        }
    }

    Ok(())
}

/// Site title with its home page URL
fn site_heading(config: &SiteConfig) -> String {
    format!("{} <{}>", config.title, config.full_url(&config.root))
}

/// Count label occurrences, most frequent first, ties by name
fn count_by<F>(posts: &[PostSummary], labels: F) -> Vec<(String, usize)>
where
    F: Fn(&PostSummary) -> &Vec<String>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for label in labels(post) {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<_> = counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn print_counts(heading: &str, counts: Vec<(String, usize)>, json: bool) -> Result<()> {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = counts
            .into_iter()
            .map(|(label, n)| (label, n.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }
    println!("{} ({}):", heading, counts.len());
    for (label, n) in counts {
        println!("  {} ({})", label, n);
    }
    Ok(())
}
