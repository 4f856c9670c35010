//! Pure read operations over the document store.
//!
//! The documentation corpus is semi-structured, hand-authored markdown; the
//! extraction helpers here (`Category:` labels, bullet attribute
//! definitions, first-meaningful-line snippets) are line-scanning
//! conveniences over that informal structure, not a markdown parser.
//!
//! All matching is case-insensitive. "No match" is never an error: callers
//! turn an empty result or `None` into a not-found message.

use std::collections::BTreeMap;

use crate::store::DocRecord;

/// A search match with its one-line relevance snippet.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub key: &'a str,
    pub snippet: String,
}

/// A component whose docs define the searched attribute, with the
/// surrounding definition block.
#[derive(Debug, Clone)]
pub struct AttributeHit<'a> {
    pub key: &'a str,
    pub context: String,
}

/// Substring search over keys and full content, in insertion order.
///
/// Each hit carries the first meaningful content line as its snippet
/// (`fallback` when the document has none). No ranking beyond containment.
pub fn search<'a>(
    records: &'a [DocRecord],
    query: &str,
    skip_prefixes: &[&str],
    fallback: &str,
) -> Vec<SearchHit<'a>> {
    let query = query.to_lowercase();

    records
        .iter()
        .filter(|r| {
            r.key.to_lowercase().contains(&query) || r.content.to_lowercase().contains(&query)
        })
        .map(|r| SearchHit {
            key: &r.key,
            snippet: first_description_line(&r.content, skip_prefixes)
                .unwrap_or(fallback)
                .to_string(),
        })
        .collect()
}

/// Exact key match. `key_lower` must already be lowercased.
pub fn find_by_key<'a>(records: &'a [DocRecord], key_lower: &str) -> Option<&'a DocRecord> {
    records.iter().find(|r| r.key.to_lowercase() == key_lower)
}

/// Exact key match, falling back to filename containment.
/// `needle_lower` must already be lowercased.
pub fn find_by_key_or_filename<'a>(
    records: &'a [DocRecord],
    needle_lower: &str,
) -> Option<&'a DocRecord> {
    records.iter().find(|r| {
        r.key.to_lowercase() == needle_lower || r.filename.to_lowercase().contains(needle_lower)
    })
}

/// All keys of a collection, comma-separated, for not-found messages.
pub fn available_keys(records: &[DocRecord]) -> String {
    records
        .iter()
        .map(|r| r.key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Records sorted by key ascending.
pub fn sorted_by_key(records: &[DocRecord]) -> Vec<&DocRecord> {
    let mut sorted: Vec<&DocRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));
    sorted
}

/// Partition records into category buckets keyed by their `Category:` label.
///
/// Records without a label land in the `Other` bucket. Bucket names and the
/// keys inside each bucket are sorted lexicographically.
pub fn group_by_category(records: &[DocRecord]) -> BTreeMap<String, Vec<&str>> {
    let mut buckets: BTreeMap<String, Vec<&str>> = BTreeMap::new();

    for r in records {
        let category = category_of(&r.content).unwrap_or("Other").to_string();
        buckets.entry(category).or_default().push(r.key.as_str());
    }

    for keys in buckets.values_mut() {
        keys.sort_unstable();
    }

    buckets
}

/// Scan components for a bullet-style definition of `attribute`, capturing
/// the definition block of the first match per component. Components with
/// no match are excluded.
pub fn find_by_attribute<'a>(records: &'a [DocRecord], attribute: &str) -> Vec<AttributeHit<'a>> {
    let attribute = attribute.to_lowercase();

    records
        .iter()
        .filter_map(|r| {
            attribute_context(&r.content, &attribute).map(|context| AttributeHit {
                key: &r.key,
                context,
            })
        })
        .collect()
}

/// First content line that is non-empty, not a heading, and not starting
/// with any of `skip_prefixes`. Returned trimmed.
pub fn first_description_line<'a>(content: &'a str, skip_prefixes: &[&str]) -> Option<&'a str> {
    content
        .lines()
        .find(|line| {
            !line.trim().is_empty()
                && !line.starts_with('#')
                && skip_prefixes.iter().all(|p| !line.starts_with(p))
        })
        .map(str::trim)
}

/// Derived one-line description for a rule listing: first line that is
/// non-empty, not a heading, not a horizontal rule, and longer than 10
/// characters, truncated to 100 characters with a trailing ellipsis.
pub fn brief_description(content: &str) -> Option<String> {
    content
        .lines()
        .find(|line| {
            !line.trim().is_empty()
                && !line.starts_with('#')
                && !line.starts_with("---")
                && line.chars().count() > 10
        })
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.chars().count() > 100 {
                let cut: String = trimmed.chars().take(100).collect();
                format!("{cut}...")
            } else {
                trimmed.to_string()
            }
        })
}

/// Value of the first `Category: <value>` label in the content, matched
/// case-insensitively anywhere in a line.
pub fn category_of(content: &str) -> Option<&str> {
    const LABEL: &str = "category:";

    for line in content.lines() {
        if let Some(idx) = find_ascii_ci(line, LABEL) {
            let value = line[idx + LABEL.len()..].trim();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    None
}

/// Definition block for a backtick-wrapped attribute name.
///
/// The anchor line must contain `` `attribute` `` (case-insensitive) and
/// begin with a bullet marker. The block extends forward until the next
/// attribute definition line, a blank line, or 10 lines of lookahead,
/// whichever comes first.
pub fn attribute_context(content: &str, attribute_lower: &str) -> Option<String> {
    let needle = format!("`{attribute_lower}`");
    let lines: Vec<&str> = content.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with('-') && !line.starts_with('•') {
            continue;
        }
        if !line.to_lowercase().contains(&needle) {
            continue;
        }

        let mut end = i + 1;
        while end < lines.len() && end < i + 10 && !is_attribute_definition(lines[end]) {
            if lines[end].trim().is_empty() {
                break;
            }
            end += 1;
        }

        return Some(lines[i..end].join("\n").trim().to_string());
    }

    None
}

/// Matches the ``- **`name`**`` shape that opens an attribute definition.
fn is_attribute_definition(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('-') else {
        return false;
    };
    let after_ws = rest.trim_start();
    after_ws.len() < rest.len() && after_ws.starts_with("**`")
}

/// ASCII case-insensitive substring search. `needle_lower` must be
/// lowercase ASCII, so a match index always lands on a char boundary.
fn find_ascii_ci(haystack: &str, needle_lower: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle_lower.len())
        .position(|w| w.eq_ignore_ascii_case(needle_lower.as_bytes()))
}
