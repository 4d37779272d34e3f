//! Post index - lookup structures derived from the loaded collection
//!
//! Built eagerly, once per load, and read-only afterwards. All structures
//! index into the owned post vector rather than cloning posts.

use chrono::Datelike;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

use crate::content::Post;

/// Neutral tag-cloud weight used when every tag occurs equally often.
pub const NEUTRAL_TAG_SIZE: f64 = 1.0;

/// One month of the archive, posts in descending-date order.
pub struct ArchiveMonth<'a> {
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    pub posts: Vec<&'a Post>,
}

/// One year of the archive, months in descending order.
pub struct ArchiveYear<'a> {
    pub year: i32,
    pub months: Vec<ArchiveMonth<'a>>,
}

/// Derived, read-only view over the post collection.
pub struct PostIndex {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
    by_tag: BTreeMap<String, Vec<usize>>,
    by_year_month: BTreeMap<i32, BTreeMap<u32, Vec<usize>>>,
    all_tags: Vec<String>,
    tag_counts: IndexMap<String, usize>,
}

impl PostIndex {
    /// Build the index in a single pass over the collection.
    ///
    /// Slug collisions cannot occur per the loader's contract; if one slips
    /// through anyway the later post wins. Posts whose date does not parse
    /// are left out of the year/month archive.
    pub fn build(posts: Vec<Post>) -> Self {
        let mut by_slug = HashMap::new();
        let mut by_tag: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_year_month: BTreeMap<i32, BTreeMap<u32, Vec<usize>>> = BTreeMap::new();
        let mut tag_counts: IndexMap<String, usize> = IndexMap::new();

        for (i, post) in posts.iter().enumerate() {
            by_slug.insert(post.slug.clone(), i);

            for tag in &post.tags {
                *tag_counts.entry(tag.clone()).or_insert(0) += 1;
                let bucket = by_tag.entry(tag.clone()).or_default();
                // A tag repeated within one post still lists the post once.
                if bucket.last() != Some(&i) {
                    bucket.push(i);
                }
            }

            if let Some(date) = post.parsed_date() {
                by_year_month
                    .entry(date.year())
                    .or_default()
                    .entry(date.month())
                    .or_default()
                    .push(i);
            }
        }

        let date_desc = |&a: &usize, &b: &usize| {
            posts[b]
                .parsed_date()
                .cmp(&posts[a].parsed_date())
                .then(a.cmp(&b))
        };
        for bucket in by_tag.values_mut() {
            bucket.sort_by(date_desc);
        }
        for months in by_year_month.values_mut() {
            for bucket in months.values_mut() {
                bucket.sort_by(date_desc);
            }
        }

        let all_tags: Vec<String> = by_tag.keys().cloned().collect();

        Self {
            posts,
            by_slug,
            by_tag,
            by_year_month,
            all_tags,
            tag_counts,
        }
    }

    /// All posts, in the order they were loaded (descending date).
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The `n` most recent posts.
    pub fn recent(&self, n: usize) -> &[Post] {
        &self.posts[..n.min(self.posts.len())]
    }

    /// Look up the unique post with this slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&i| &self.posts[i])
    }

    /// All posts carrying this tag, descending date.
    pub fn posts_by_tag(&self, tag: &str) -> Vec<&Post> {
        self.by_tag
            .get(tag)
            .map(|bucket| bucket.iter().map(|&i| &self.posts[i]).collect())
            .unwrap_or_default()
    }

    /// Every tag in the collection, sorted, case-sensitive, deduplicated.
    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }

    /// Occurrence count per tag, in first-seen order.
    pub fn tag_counts(&self) -> &IndexMap<String, usize> {
        &self.tag_counts
    }

    /// Display weight for a tag with `count` occurrences: linear between
    /// `min_size` and `max_size` relative to the least- and most-frequent
    /// tag, or the fixed neutral weight when all tags tie.
    pub fn tag_weight(&self, count: usize, min_size: f64, max_size: f64) -> f64 {
        let min_count = self.tag_counts.values().copied().min().unwrap_or(0);
        let max_count = self.tag_counts.values().copied().max().unwrap_or(0);

        if min_count == max_count {
            return NEUTRAL_TAG_SIZE;
        }

        let span = (max_count - min_count) as f64;
        let ratio = (count.saturating_sub(min_count) as f64 / span).min(1.0);
        min_size + ratio * (max_size - min_size)
    }

    /// The archive: years descending, months descending, posts descending.
    pub fn archive(&self) -> Vec<ArchiveYear<'_>> {
        self.by_year_month
            .iter()
            .rev()
            .map(|(&year, months)| ArchiveYear {
                year,
                months: months
                    .iter()
                    .rev()
                    .map(|(&month, bucket)| ArchiveMonth {
                        year,
                        month,
                        posts: bucket.iter().map(|&i| &self.posts[i]).collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Case-insensitive substring search over title, excerpt, body and tags.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.posts.iter().collect();
        }

        self.posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&query)
                    || post.excerpt.to_lowercase().contains(&query)
                    || post.raw.to_lowercase().contains(&query)
                    || post.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }
}
