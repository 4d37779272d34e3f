//! URL and query-string helpers
//!
//! Tag and post selection is deep-linked through query parameters
//! (`?tag=<name>`, `?post=<slug>`), so link building and location parsing
//! live together here.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Query-component encoding: keep the unreserved marks readable.
const QUERY_PARAM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query parameter value.
pub fn encode_param(value: &str) -> String {
    utf8_percent_encode(value, QUERY_PARAM).to_string()
}

/// Link to an individual post page.
pub fn post_link(slug: &str) -> String {
    format!("post.html?post={}", encode_param(slug))
}

/// Link to the tag listing filtered to one tag.
pub fn tag_link(tag: &str) -> String {
    format!("tags.html?tag={}", encode_param(tag))
}

/// Parse a query string (with or without the leading `?`) into decoded pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// First value of a query parameter, decoded.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Which page a location refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Posts,
    Post(String),
    Tags(Option<String>),
    Archive,
}

/// Resolve a path plus query string to a page, the way the site's pages are
/// wired: `?post=` wins over the path, `posts.html` lists everything, and
/// anything unrecognized is the home page.
pub fn route_for(path: &str, query: &str) -> Route {
    if let Some(slug) = query_param(query, "post") {
        return Route::Post(slug);
    }
    if path.contains("posts.html") || path.contains("post.html") {
        return Route::Posts;
    }
    if path.contains("tags.html") {
        return Route::Tags(query_param(query, "tag"));
    }
    if path.contains("archive.html") {
        return Route::Archive;
    }
    Route::Home
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_param() {
        assert_eq!(encode_param("design-patterns"), "design-patterns");
        assert_eq!(encode_param("c++ tips"), "c%2B%2B%20tips");
    }

    #[test]
    fn test_links() {
        assert_eq!(post_link("hello-world"), "post.html?post=hello-world");
        assert_eq!(tag_link("web dev"), "tags.html?tag=web%20dev");
    }

    #[test]
    fn test_parse_query_round_trip() {
        let query = format!("?tag={}&post={}", encode_param("web dev"), "a-slug");
        assert_eq!(query_param(&query, "tag").as_deref(), Some("web dev"));
        assert_eq!(query_param(&query, "post").as_deref(), Some("a-slug"));
        assert_eq!(query_param(&query, "missing"), None);
    }

    #[test]
    fn test_parse_query_edge_cases() {
        assert!(parse_query("").is_empty());
        assert_eq!(parse_query("?flag"), vec![("flag".to_string(), String::new())]);
    }

    #[test]
    fn test_route_for() {
        assert_eq!(route_for("/index.html", ""), Route::Home);
        assert_eq!(route_for("/posts.html", ""), Route::Posts);
        assert_eq!(
            route_for("/post.html", "?post=hello"),
            Route::Post("hello".to_string())
        );
        // a post param deep-links regardless of path
        assert_eq!(
            route_for("/index.html", "?post=hello"),
            Route::Post("hello".to_string())
        );
        // post.html without a slug falls back to the listing
        assert_eq!(route_for("/post.html", ""), Route::Posts);
        assert_eq!(route_for("/tags.html", ""), Route::Tags(None));
        assert_eq!(
            route_for("/tags.html", "?tag=rust"),
            Route::Tags(Some("rust".to_string()))
        );
        assert_eq!(route_for("/archive.html", ""), Route::Archive);
    }
}
