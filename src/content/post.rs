//! Post model and manifest descriptors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FrontMatter;
use crate::helpers::parse_date;

/// One entry of the post manifest (`posts.json`).
///
/// The manifest carries the file to fetch plus optional metadata; any field
/// also present in the document's front-matter is overridden by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Markdown file name, relative to the posts directory
    pub file: String,

    /// Unique post identifier, used for lookup and links
    pub slug: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub excerpt: Option<String>,
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Unique identifier, used for lookup and links
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the source (ISO-like calendar date)
    pub date: String,

    /// Post tags, in source order
    pub tags: Vec<String>,

    /// Short teaser shown in listings
    pub excerpt: String,

    /// Raw markdown body, front-matter stripped
    pub raw: String,

    /// Rendered HTML body
    pub content: String,
}

impl Post {
    /// Build a post from a manifest entry and its parsed document.
    ///
    /// Front-matter fields win over manifest fields on collision; the slug
    /// always comes from the manifest, since links are built from it.
    pub fn from_entry(entry: ManifestEntry, fm: FrontMatter, raw: String, content: String) -> Self {
        Self {
            slug: entry.slug,
            title: fm
                .title
                .or(entry.title)
                .unwrap_or_else(|| "Untitled".to_string()),
            date: fm.date.or(entry.date).unwrap_or_default(),
            tags: fm.tags.or(entry.tags).unwrap_or_default(),
            excerpt: fm.excerpt.or(entry.excerpt).unwrap_or_default(),
            raw,
            content,
        }
    }

    /// The publication date as a calendar date, if it parses.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ManifestEntry {
        ManifestEntry {
            file: "hello.md".to_string(),
            slug: "hello".to_string(),
            title: Some("Manifest Title".to_string()),
            date: Some("2024-01-01".to_string()),
            tags: Some(vec!["manifest".to_string()]),
            excerpt: Some("From the manifest".to_string()),
        }
    }

    #[test]
    fn test_front_matter_wins_over_manifest() {
        let fm = FrontMatter {
            title: Some("Document Title".to_string()),
            date: Some("2024-02-02".to_string()),
            tags: Some(vec!["doc".to_string()]),
            ..Default::default()
        };
        let post = Post::from_entry(entry(), fm, "body".into(), "<p>body</p>".into());
        assert_eq!(post.title, "Document Title");
        assert_eq!(post.date, "2024-02-02");
        assert_eq!(post.tags, vec!["doc"]);
        // The manifest fills in what the front-matter left out.
        assert_eq!(post.excerpt, "From the manifest");
        assert_eq!(post.slug, "hello");
    }

    #[test]
    fn test_manifest_fields_used_when_front_matter_empty() {
        let post = Post::from_entry(entry(), FrontMatter::default(), "b".into(), "h".into());
        assert_eq!(post.title, "Manifest Title");
        assert_eq!(post.date, "2024-01-01");
        assert_eq!(post.tags, vec!["manifest"]);
    }

    #[test]
    fn test_parsed_date() {
        let mut post = Post::from_entry(entry(), FrontMatter::default(), "".into(), "".into());
        post.date = "2024-03-01".to_string();
        let d = post.parsed_date().unwrap();
        assert_eq!(d.format("%Y-%m-%d").to_string(), "2024-03-01");

        post.date = "not a date".to_string();
        assert!(post.parsed_date().is_none());
    }
}
