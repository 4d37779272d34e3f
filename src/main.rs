//! CLI entry point for mdblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdblog::content::{DirSource, DocumentSource, HttpSource};
use mdblog::helpers::{route_for, Route};
use mdblog::index::PostIndex;
use mdblog::{views, Blog};

#[derive(Parser)]
#[command(name = "mdblog")]
#[command(version)]
#[command(about = "A markdown blog viewer", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Load posts from a local directory instead of the configured URL
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Load posts from this base URL (overrides the configured one)
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Render the article for one post
    Show {
        /// Post slug
        slug: String,
    },

    /// Render the tag cloud, or the listing for one tag
    Tags {
        /// Tag to list posts for
        tag: Option<String>,
    },

    /// Render the year/month archive timeline
    Archive,

    /// Search posts by title, excerpt, body or tag
    Search { query: String },

    /// Render the fragment for a page location, e.g. "posts.html?tag=rust"
    Render { location: String },

    /// Show or change the persisted theme (light, dark, toggle)
    Theme { value: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdblog=debug,info"
    } else {
        "mdblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let blog = Blog::new(&base_dir)?;
    let source = make_source(cli.dir.as_deref(), cli.url.as_deref(), &blog);

    match cli.command {
        Commands::List { r#type } => {
            let index = blog.load(source.as_ref()).await;
            run_list(&index, &r#type)?;
        }

        Commands::Show { slug } => {
            let index = blog.load(source.as_ref()).await;
            match index.by_slug(&slug) {
                Some(post) => println!("{}", views::post_article(post)),
                None => println!("{}", views::not_found()),
            }
        }

        Commands::Tags { tag } => {
            let index = blog.load(source.as_ref()).await;
            println!("{}", render_route(&blog, &index, Route::Tags(tag)));
        }

        Commands::Archive => {
            let index = blog.load(source.as_ref()).await;
            println!("{}", render_route(&blog, &index, Route::Archive));
        }

        Commands::Search { query } => {
            let index = blog.load(source.as_ref()).await;
            println!("{}", views::search_results(&index, &query));
        }

        Commands::Render { location } => {
            let index = blog.load(source.as_ref()).await;
            let (path, query) = location.split_once('?').unwrap_or((location.as_str(), ""));
            println!("{}", render_route(&blog, &index, route_for(path, query)));
        }

        Commands::Theme { value } => run_theme(&blog, value.as_deref())?,
    }

    Ok(())
}

/// Pick the document source: an explicit directory or URL wins, otherwise
/// the configured site URL.
fn make_source(dir: Option<&Path>, url: Option<&str>, blog: &Blog) -> Box<dyn DocumentSource> {
    if let Some(dir) = dir {
        Box::new(DirSource::new(dir))
    } else if let Some(url) = url {
        Box::new(HttpSource::new(url))
    } else {
        Box::new(HttpSource::new(blog.config.url.clone()))
    }
}

fn render_route(blog: &Blog, index: &PostIndex, route: Route) -> String {
    match route {
        Route::Home => views::post_list(index.recent(blog.config.recent_posts)),
        Route::Posts => views::post_list(index.posts()),
        Route::Post(slug) => match index.by_slug(&slug) {
            Some(post) => views::post_article(post),
            None => views::not_found(),
        },
        Route::Tags(None) => views::tag_cloud(index, &blog.config.tag_cloud),
        Route::Tags(Some(tag)) => views::tagged_posts(index, &tag),
        Route::Archive => views::archive_timeline(index),
    }
}

fn run_list(index: &PostIndex, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", index.posts().len());
            for post in index.posts() {
                println!("  {} - {} [{}]", post.date, post.title, post.slug);
            }
        }
        "tag" | "tags" => {
            let counts = index.tag_counts();
            println!("Tags ({}):", counts.len());
            let mut tags: Vec<_> = counts.iter().collect();
            tags.sort_by(|a, b| b.1.cmp(a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }
    Ok(())
}

fn run_theme(blog: &Blog, value: Option<&str>) -> Result<()> {
    let store = blog.theme_store();
    match value {
        None => println!("{}", store.load()),
        Some("toggle") => println!("{}", store.toggle()?),
        Some(value) => {
            let theme = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            store.save(theme)?;
            println!("{}", theme);
        }
    }
    Ok(())
}
