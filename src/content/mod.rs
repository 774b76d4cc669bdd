//! Content module - reads post files into raw records

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::{render, ExcerptRenderer};
pub use post::RawPost;
