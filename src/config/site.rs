//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub author: String,

    // Where the manifest and post documents live
    pub url: String,
    pub posts_dir: String,
    pub manifest: String,

    // Presentation
    pub recent_posts: usize,
    #[serde(default)]
    pub tag_cloud: TagCloudConfig,
    #[serde(default)]
    pub theme: ThemeConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Tag cloud display weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagCloudConfig {
    pub min_size: f64,
    pub max_size: f64,
}

/// Theme preference handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default: String,
    pub state_file: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: String::new(),
            url: "http://localhost:8000".to_string(),
            posts_dir: "posts".to_string(),
            manifest: "posts.json".to_string(),
            recent_posts: 3,
            tag_cloud: TagCloudConfig::default(),
            theme: ThemeConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl Default for TagCloudConfig {
    fn default() -> Self {
        Self {
            min_size: 0.8,
            max_size: 1.8,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: "light".to_string(),
            state_file: ".theme".to_string(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
