//! Archive timeline fragment

use crate::content::Post;
use crate::helpers::{html_escape, month_name, post_link, short_date};
use crate::index::PostIndex;

/// The whole archive: years descending, months descending, posts descending.
pub fn archive_timeline(index: &PostIndex) -> String {
    index
        .archive()
        .iter()
        .map(|year| {
            let months: String = year
                .months
                .iter()
                .map(|month| {
                    let rows: String = month.posts.iter().map(|p| archive_row(p)).collect();
                    format!(
                        r#"<div class="archive-month"><h3>{}</h3><div class="archive-posts">{}</div></div>"#,
                        month_name(month.month),
                        rows
                    )
                })
                .collect();
            format!(
                r#"<div class="archive-year"><h2>{}</h2>{}</div>"#,
                year.year, months
            )
        })
        .collect()
}

fn archive_row(post: &Post) -> String {
    format!(
        r#"<a href="{}" class="archive-post"><span class="archive-post-title">{}</span><span class="archive-post-date">{}</span></a>"#,
        post_link(&post.slug),
        html_escape(&post.title),
        short_date(&post.date)
    )
}
