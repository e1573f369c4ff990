//! Front matter handling
//!
//! Notes may arrive with an existing YAML front matter block; it is stripped
//! wholesale, never inspected or merged. Published memos get a fresh block
//! built by [`Frontmatter::memo`].

use crate::error::PublishResult;
use chrono::{DateTime, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Leading `---` ... `---` block, shortest match, plus trailing blank lines
static LEADING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---.*?---\s*").expect("front matter regex"));

/// Front matter for a published memo
///
/// Field order is the serialization order of the YAML block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Site layout, always `memo`
    pub layout: String,

    /// Memo title
    pub title: String,

    /// Creation timestamp, as a display string
    pub date: String,

    /// Tags, always the single tag `memo`
    pub tags: Vec<String>,
}

impl Frontmatter {
    /// Build the front matter for a new memo
    pub fn memo(title: impl Into<String>, date: DateTime<Local>) -> Self {
        Self {
            layout: "memo".to_string(),
            title: title.into(),
            date: date.format("%Y-%m-%d %H:%M:%S %z").to_string(),
            tags: vec!["memo".to_string()],
        }
    }
}

/// Strip a leading front matter block from content
///
/// Removes the shortest leading `---` ... `---` block (spanning newlines)
/// together with any blank lines that follow it. Content that does not begin
/// with such a block is returned unchanged.
pub fn strip_front_matter(content: &str) -> &str {
    match LEADING_BLOCK.find(content) {
        Some(m) => &content[m.end()..],
        None => content,
    }
}

/// Read a note file and return its content without front matter
///
/// I/O failures propagate; everything else is infallible.
pub fn read_content(path: &Path) -> PublishResult<String> {
    let content = fs::read_to_string(path)?;
    Ok(strip_front_matter(&content).to_string())
}
