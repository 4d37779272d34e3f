//! Tag cloud and per-tag listing fragments

use super::listing::post_list;
use crate::config::TagCloudConfig;
use crate::helpers::html_escape;
use crate::index::PostIndex;

/// The tag cloud: tags by descending occurrence count (ties alphabetical),
/// font size weighted by frequency.
pub fn tag_cloud(index: &PostIndex, config: &TagCloudConfig) -> String {
    let counts = index.tag_counts();

    let mut tags: Vec<&String> = index.all_tags().iter().collect();
    tags.sort_by(|a, b| counts[*b].cmp(&counts[*a]));

    tags.iter()
        .map(|tag| {
            let count = counts[*tag];
            let size = index.tag_weight(count, config.min_size, config.max_size);
            format!(
                r#"<button class="tag" data-tag="{tag}" style="font-size: {size:.2}em">{tag} ({count})</button>"#,
                tag = html_escape(tag),
                size = size,
                count = count,
            )
        })
        .collect()
}

/// The listing shown when one tag is selected.
pub fn tagged_posts(index: &PostIndex, tag: &str) -> String {
    format!(
        r#"<section class="tag-posts"><h2>Posts tagged &quot;<span class="current-tag">{}</span>&quot;</h2>{}</section>"#,
        html_escape(tag),
        post_list(index.posts_by_tag(tag))
    )
}
