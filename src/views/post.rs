//! Individual post fragments

use super::listing::tag_links;
use crate::content::Post;
use crate::helpers::{full_date, html_escape};

/// The full article for one post. `post.content` is already HTML.
pub fn post_article(post: &Post) -> String {
    format!(
        r#"<article class="post-content"><a href="posts.html" class="back-link">&larr; Back to Posts</a><header class="post-header"><h1>{title}</h1><div class="post-meta-full"><span class="post-date">{date}</span><div class="post-tags">{tags}</div></div></header><div class="prose">{content}</div></article>"#,
        title = html_escape(&post.title),
        date = full_date(&post.date),
        tags = tag_links(post),
        content = post.content,
    )
}

/// Shown when a slug lookup comes back empty.
pub fn not_found() -> String {
    r#"<div class="page-content"><h1>Post Not Found</h1><p>The post you're looking for doesn't exist.</p><a href="posts.html" class="view-all-btn">&larr; Back to Posts</a></div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_article_keeps_rendered_html() {
        let post = Post {
            slug: "s".to_string(),
            title: "A & B".to_string(),
            date: "2024-01-01".to_string(),
            tags: vec![],
            excerpt: String::new(),
            raw: String::new(),
            content: "<p>already html</p>".to_string(),
        };
        let html = post_article(&post);
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("<p>already html</p>"));
        assert!(html.contains("January 1, 2024"));
    }

    #[test]
    fn test_post_article_tags_sit_directly_in_the_div() {
        let post = Post {
            slug: "s".to_string(),
            title: "T".to_string(),
            date: "2024-01-01".to_string(),
            tags: vec!["rust".to_string()],
            excerpt: String::new(),
            raw: String::new(),
            content: String::new(),
        };
        let html = post_article(&post);
        assert!(html.contains(r#"<div class="post-tags"><a href="tags.html?tag=rust""#));
        // one wrapper, no nested span repeating the class
        assert_eq!(html.matches("post-tags").count(), 1);
    }

    #[test]
    fn test_not_found_fragment() {
        assert!(not_found().contains("Post Not Found"));
    }
}
