//! Post listing fragments

use crate::content::Post;
use crate::helpers::{full_date, html_escape, post_link, tag_link};

/// One entry in a post listing.
pub fn post_item(post: &Post) -> String {
    format!(
        r#"<li class="post-item"><a href="{link}" class="post-link"><h3 class="post-title">{title}</h3><div class="post-meta"><span class="post-date">{date}</span>{tags}</div><p class="post-excerpt">{excerpt}</p></a></li>"#,
        link = post_link(&post.slug),
        title = html_escape(&post.title),
        date = full_date(&post.date),
        tags = post_tags(post),
        excerpt = html_escape(&post.excerpt),
    )
}

/// A whole listing, newest first as given.
pub fn post_list<'a, I>(posts: I) -> String
where
    I: IntoIterator<Item = &'a Post>,
{
    let items: String = posts.into_iter().map(post_item).collect();
    format!(r#"<ul class="posts-list">{}</ul>"#, items)
}

/// The tag links shown in a post's meta line; empty for tagless posts.
pub fn post_tags(post: &Post) -> String {
    if post.tags.is_empty() {
        return String::new();
    }
    format!(r#"<span class="post-tags">{}</span>"#, tag_links(post))
}

/// Bare `<a class="tag">` links, no wrapper element.
pub fn tag_links(post: &Post) -> String {
    post.tags
        .iter()
        .map(|tag| {
            format!(
                r#"<a href="{}" class="tag">{}</a>"#,
                tag_link(tag),
                html_escape(tag)
            )
        })
        .collect()
}
