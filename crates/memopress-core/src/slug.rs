//! Title slugification
//!
//! Turns an arbitrary title into a URL-safe identifier: lowercase, spaces
//! replaced with hyphens, everything outside `[\w-]` dropped.

use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]").expect("slug regex"));

/// Convert a title to a slug
///
/// Idempotent: applying `slugify` to its own output is a no-op. Never fails;
/// a title with no slug-safe characters produces an empty string.
///
/// ```
/// use memopress_core::slug::slugify;
///
/// assert_eq!(slugify("My First Post"), "my-first-post");
/// assert_eq!(slugify("  Rust & Notes!  "), "rust--notes");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = lowered.trim().replace(' ', "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned()
}
