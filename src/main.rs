//! CLI entry point for blog-index

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-index")]
#[command(version)]
#[command(about = "Date-ordered post index and pagination for a static blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category, keyword, invalid)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show one listing page
    #[command(alias = "p")]
    Page {
        /// Page number, starting at 1
        #[arg(default_value = "1")]
        number: usize,
    },

    /// Enumerate the listing pages to pre-render
    Paths,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_index=debug,info"
    } else {
        "blog_index=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::list::run(&blog, &r#type, cli.json)?;
        }

        Commands::Page { number } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::debug!("Showing page {} of {:?}", number, base_dir);
            blog_index::commands::page::run(&blog, number, cli.json)?;
        }

        Commands::Paths => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::paths::run(&blog, cli.json)?;
        }

        Commands::Version => {
            println!("blog-index version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
