//! Post loader - turns a manifest and its documents into the post collection

use anyhow::{Context, Result};
use futures::future;

use super::{sample_posts, DocumentSource, FrontMatter, ManifestEntry, MarkdownRenderer, Post};
use crate::config::BlogConfig;

/// Loads the post collection from a [`DocumentSource`].
///
/// Failure handling is deliberately asymmetric: a manifest that cannot be
/// fetched or parsed replaces the whole collection with the built-in samples,
/// while a single post that fails only drops that post. Either way the caller
/// always gets a renderable collection.
pub struct PostLoader<'a> {
    source: &'a dyn DocumentSource,
    renderer: &'a MarkdownRenderer,
    config: &'a BlogConfig,
}

impl<'a> PostLoader<'a> {
    pub fn new(
        source: &'a dyn DocumentSource,
        renderer: &'a MarkdownRenderer,
        config: &'a BlogConfig,
    ) -> Self {
        Self {
            source,
            renderer,
            config,
        }
    }

    /// Load all posts, in descending-date order.
    pub async fn load_posts(&self) -> Vec<Post> {
        let entries = match self.fetch_manifest().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Manifest unavailable, using sample posts: {:#}", e);
                return self.render_samples();
            }
        };

        // Fetches run concurrently; the sort below re-establishes order.
        let loaded = future::join_all(entries.into_iter().map(|e| self.load_post(e))).await;
        let mut posts: Vec<Post> = loaded.into_iter().flatten().collect();

        // Unparseable dates compare as None and end up last.
        posts.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        posts
    }

    async fn fetch_manifest(&self) -> Result<Vec<ManifestEntry>> {
        let path = format!("{}/{}", self.config.posts_dir, self.config.manifest);
        let text = self
            .source
            .fetch(&path)
            .await
            .with_context(|| format!("failed to fetch manifest {}", path))?;
        let entries: Vec<ManifestEntry> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse manifest {}", path))?;
        Ok(entries)
    }

    /// Load a single post; any failure drops just this post.
    async fn load_post(&self, entry: ManifestEntry) -> Option<Post> {
        let path = format!("{}/{}", self.config.posts_dir, entry.file);

        let text = match self.source.fetch(&path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to fetch post {}: {}", path, e);
                return None;
            }
        };

        let (fm, body) = FrontMatter::parse(&text);

        let content = match self.renderer.render(body) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to render post {}: {}", path, e);
                return None;
            }
        };

        Some(Post::from_entry(entry, fm, body.to_string(), content))
    }

    fn render_samples(&self) -> Vec<Post> {
        sample_posts()
            .into_iter()
            .map(|mut post| {
                post.content = self.renderer.render(&post.raw).unwrap_or_default();
                post
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DirSource;
    use std::fs;
    use std::path::Path;

    fn write_site(dir: &Path, manifest: &str, files: &[(&str, &str)]) {
        fs::create_dir_all(dir.join("posts")).unwrap();
        fs::write(dir.join("posts/posts.json"), manifest).unwrap();
        for (name, body) in files {
            fs::write(dir.join("posts").join(name), body).unwrap();
        }
    }

    async fn load(dir: &Path) -> Vec<Post> {
        let source = DirSource::new(dir);
        let renderer = MarkdownRenderer::new();
        let config = BlogConfig::default();
        PostLoader::new(&source, &renderer, &config)
            .load_posts()
            .await
    }

    #[tokio::test]
    async fn test_end_to_end_single_post() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            r#"[{"file": "hello.md", "slug": "hello"}]"#,
            &[(
                "hello.md",
                "---\ntitle: Hello\ntags: [a, b]\ndate: 2024-03-01\n---\nBody text.",
            )],
        );

        let posts = load(dir.path()).await;
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.title, "Hello");
        assert_eq!(post.tags, vec!["a", "b"]);
        assert_eq!(post.date, "2024-03-01");
        assert_eq!(post.raw, "Body text.");
        assert!(post.content.contains("Body text."));

        let index = crate::index::PostIndex::build(posts);
        assert_eq!(index.all_tags(), &["a", "b"]);
    }

    #[tokio::test]
    async fn test_missing_manifest_falls_back_to_samples() {
        let dir = tempfile::tempdir().unwrap();

        let posts = load(dir.path()).await;
        let expected: Vec<String> = sample_posts().into_iter().map(|p| p.slug).collect();
        let got: Vec<String> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(got, expected);
        assert!(posts.iter().all(|p| !p.content.is_empty()));
    }

    #[tokio::test]
    async fn test_unparseable_manifest_falls_back_to_samples() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), "this is not json", &[]);

        let posts = load(dir.path()).await;
        assert_eq!(posts.len(), sample_posts().len());
    }

    #[tokio::test]
    async fn test_failing_post_dropped_others_kept() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            r#"[{"file": "ok.md", "slug": "ok"},
                {"file": "gone.md", "slug": "gone"}]"#,
            &[("ok.md", "---\ntitle: Ok\ndate: 2024-01-01\n---\nStill here.")],
        );

        let posts = load(dir.path()).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "ok");
    }

    #[tokio::test]
    async fn test_posts_sorted_by_date_descending() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            r#"[{"file": "old.md", "slug": "old"},
                {"file": "new.md", "slug": "new"},
                {"file": "undated.md", "slug": "undated"}]"#,
            &[
                ("old.md", "---\ntitle: Old\ndate: 2023-05-01\n---\nx"),
                ("new.md", "---\ntitle: New\ndate: 2024-05-01\n---\nx"),
                ("undated.md", "---\ntitle: Undated\n---\nx"),
            ],
        );

        let posts = load(dir.path()).await;
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "undated"]);
    }

    #[tokio::test]
    async fn test_manifest_metadata_merged_with_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            r#"[{"file": "p.md", "slug": "p", "title": "Manifest Title",
                "excerpt": "Manifest excerpt", "date": "2020-01-01"}]"#,
            &[("p.md", "---\ntitle: Real Title\ndate: 2024-01-01\n---\nx")],
        );

        let posts = load(dir.path()).await;
        assert_eq!(posts[0].title, "Real Title");
        assert_eq!(posts[0].date, "2024-01-01");
        assert_eq!(posts[0].excerpt, "Manifest excerpt");
    }

    #[tokio::test]
    async fn test_document_without_front_matter_kept_whole() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            r#"[{"file": "bare.md", "slug": "bare", "title": "Bare", "date": "2024-02-02"}]"#,
            &[("bare.md", "# No metadata\n\nJust a body.")],
        );

        let posts = load(dir.path()).await;
        assert_eq!(posts[0].raw, "# No metadata\n\nJust a body.");
        assert_eq!(posts[0].title, "Bare");
    }
}
