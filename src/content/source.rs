//! Document sources - where manifests and post files come from
//!
//! The loader is written against the [`DocumentSource`] trait so the same
//! code path serves a remote site ([`HttpSource`]) and a local content tree
//! ([`DirSource`], also what the tests use).

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} for {path}")]
    Status { path: String, status: u16 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Something that can hand back the text of a document by relative path.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, SourceError>;
}

/// Fetches documents over HTTP, relative to a base URL.
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, SourceError> {
        let url = format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Reads documents from a local directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<String, SourceError> {
        let full = self.root.join(path.trim_start_matches('/'));
        Ok(tokio::fs::read_to_string(full).await?)
    }
}
