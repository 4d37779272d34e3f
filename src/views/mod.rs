//! HTML fragment rendering for listings, posts, archive, tags and search
//!
//! Every function takes the built [`crate::index::PostIndex`] (or a post) and
//! returns a fragment string; nothing here touches the network or the index
//! contents.

mod archive;
mod listing;
mod post;
mod search;
mod tags;

pub use archive::archive_timeline;
pub use listing::{post_item, post_list, post_tags};
pub use post::{not_found, post_article};
pub use search::search_results;
pub use tags::{tag_cloud, tagged_posts};
