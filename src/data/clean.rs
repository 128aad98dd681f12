//! Name extraction from serialized dictionary lists.
//!
//! The raw tables store genres and keywords as strings such as
//! `[{'id': 18, 'name': 'Drama'}, {'id': 80, 'name': 'Crime'}]`.

use crate::config::NAME_PATTERN;
use regex::Regex;
use std::sync::OnceLock;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NAME_PATTERN).expect("valid name pattern literal"))
}

/// Extract every `'name': '...'` value, joined with `", "`.
///
/// Text without any match yields an empty string.
///
/// # Examples
///
/// ```
/// use reelmatch::data::extract_names;
///
/// let raw = "[{'id': 18, 'name': 'Drama'}, {'id': 80, 'name': 'Crime'}]";
/// assert_eq!(extract_names(raw), "Drama, Crime");
/// assert_eq!(extract_names("[]"), "");
/// ```
#[must_use]
pub fn extract_names(text: &str) -> String {
    name_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Genre names as a comma-separated string.
#[must_use]
pub fn clean_genres(text: &str) -> String {
    extract_names(text)
}

/// Keyword names as a comma-separated string.
#[must_use]
pub fn clean_keywords(text: &str) -> String {
    extract_names(text)
}
