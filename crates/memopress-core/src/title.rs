//! Title extraction from note filenames
//!
//! Note files follow the `YYYY-MM-DD-some_title.md` convention; the date
//! prefix and extension are shed and the remainder is title-cased.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-").expect("date prefix regex"));

/// Extract a human-readable title from a filename
///
/// Takes the basename without extension, strips a leading `YYYY-MM-DD-` date
/// prefix if present, turns underscores and hyphens into spaces, and
/// capitalizes each word. Filenames without the date prefix pass through that
/// step unaffected.
///
/// ```
/// use memopress_core::title::title_from_filename;
///
/// assert_eq!(title_from_filename("2024-05-01-my_first-post.md"), "My First Post");
/// assert_eq!(title_from_filename("notes.md"), "Notes");
/// ```
pub fn title_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    let without_date = DATE_PREFIX.replace(stem, "");

    without_date
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
