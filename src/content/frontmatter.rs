//! Front-matter parsing

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// A front-matter block at the very start of a document: an opening `---`
    /// line, the metadata lines, a closing `---` line, and the newline after it.
    static ref FRONT_MATTER: Regex =
        Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---(\r?\n|\z)").unwrap();
}

/// Front-matter data from a post document.
///
/// Recognized keys are typed fields; anything else lands in `extra`.
/// Fields are `Option` so that merging with manifest metadata can tell
/// "absent" apart from "present but empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Unrecognized `key: value` lines, quote-stripped.
    pub extra: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from a raw document.
    ///
    /// Returns `(front_matter, body)`. This never fails: a missing or
    /// unterminated delimiter yields empty metadata and the input unchanged,
    /// and malformed metadata lines are skipped. When a block is matched, the
    /// block and the newline after its closing delimiter are removed from the
    /// body; the remainder is untouched, leading whitespace included.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(caps) = FRONT_MATTER.captures(content) else {
            return (FrontMatter::default(), content);
        };

        let block = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let body = &content[caps.get(0).map(|m| m.end()).unwrap_or(0)..];

        let mut fm = FrontMatter::default();
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            match key {
                "title" => fm.title = Some(strip_quotes(value)),
                "date" => fm.date = Some(strip_quotes(value)),
                "excerpt" => fm.excerpt = Some(strip_quotes(value)),
                "tags" => fm.tags = Some(parse_list(value)),
                _ => {
                    fm.extra.insert(key.to_string(), strip_quotes(value));
                }
            }
        }

        (fm, body)
    }
}

/// Parse a value as a tag list if it is wrapped in `[` `]`, otherwise as a
/// single-element list (a bare scalar tag).
fn parse_list(value: &str) -> Vec<String> {
    let value = value.trim();
    if let Some(inner) = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
    {
        inner
            .split(',')
            .map(strip_quotes)
            .filter(|item| !item.is_empty())
            .collect()
    } else if value.is_empty() {
        Vec::new()
    } else {
        vec![strip_quotes(value)]
    }
}

/// Trim a scalar value and drop single/double quote characters.
fn strip_quotes(value: &str) -> String {
    value.trim().replace(['\'', '"'], "")
}
