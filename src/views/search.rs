//! Search result fragments

use super::listing::post_list;
use crate::helpers::html_escape;
use crate::index::PostIndex;

/// Search result listing with a stats line; a blank query lists everything
/// without stats.
pub fn search_results(index: &PostIndex, query: &str) -> String {
    let matches = index.search(query);
    let query = query.trim();

    if matches.is_empty() {
        return no_results(query);
    }

    let stats = if query.is_empty() {
        String::new()
    } else {
        let noun = if matches.len() == 1 { "post" } else { "posts" };
        format!(
            r#"<div class="search-stats"><p>Found {} {} for &quot;{}&quot;</p></div>"#,
            matches.len(),
            noun,
            html_escape(query)
        )
    };

    format!("{}{}", stats, post_list(matches))
}

fn no_results(query: &str) -> String {
    let message = if query.is_empty() {
        "No posts found".to_string()
    } else {
        format!("No posts found matching &quot;{}&quot;", html_escape(query))
    };
    format!(
        r#"<div class="no-results"><h3>{}</h3><p>Try adjusting your search terms or browse all posts.</p></div>"#,
        message
    )
}
