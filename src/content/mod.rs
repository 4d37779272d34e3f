//! Content pipeline: sources, front-matter, posts, markdown conversion

mod frontmatter;
mod loader;
mod markdown;
mod post;
mod samples;
mod source;

pub use frontmatter::FrontMatter;
pub use loader::PostLoader;
pub use markdown::MarkdownRenderer;
pub use post::{ManifestEntry, Post};
pub use samples::sample_posts;
pub use source::{DirSource, DocumentSource, HttpSource, SourceError};
