//! mdblog: a markdown blog viewer
//!
//! Fetches a JSON manifest of posts plus their markdown documents, parses
//! front-matter, converts bodies to HTML, and builds an in-memory index used
//! to render listings, individual posts, archives, tag clouds and search
//! results as HTML fragments.

pub mod config;
pub mod content;
pub mod helpers;
pub mod index;
pub mod theme;
pub mod views;

use anyhow::Result;
use std::path::{Path, PathBuf};

use config::BlogConfig;
use content::{DocumentSource, MarkdownRenderer, PostLoader};
use index::PostIndex;
use theme::{Theme, ThemeStore};

/// The main application: configuration plus the converter, constructed once.
pub struct Blog {
    /// Site configuration
    pub config: BlogConfig,
    /// Base directory (config and theme state live here)
    pub base_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl Blog {
    /// Create a blog instance from a directory, reading `_config.yml` if
    /// present. The markdown converter is built here, exactly once, and
    /// injected into everything that needs it.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            BlogConfig::load(&config_path)?
        } else {
            BlogConfig::default()
        };

        Ok(Self {
            config,
            base_dir,
            renderer: MarkdownRenderer::new(),
        })
    }

    /// Load the post collection from a source and build the index over it.
    /// Never fails: at worst the index holds the sample posts.
    pub async fn load(&self, source: &dyn DocumentSource) -> PostIndex {
        let loader = PostLoader::new(source, &self.renderer, &self.config);
        PostIndex::build(loader.load_posts().await)
    }

    /// The persisted theme flag for this site.
    pub fn theme_store(&self) -> ThemeStore {
        let default = self.config.theme.default.parse().unwrap_or(Theme::Light);
        ThemeStore::new(self.base_dir.join(&self.config.theme.state_file), default)
    }
}
