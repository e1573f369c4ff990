//! Image reference scanning
//!
//! Recognizes the two inline image syntaxes that appear in notes:
//! - Markdown images: `![alt](path)`
//! - Obsidian-style embeds: `![[image.png]]`, optionally with a size
//!   annotation `![[image.png|600]]`
//!
//! Both forms resolve to a uniform (alt text, path) pair; for embeds the
//! target doubles as the alt text.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub(crate) static IMAGE_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)|!\[\[(.*?)\]\]").expect("image ref regex"));

/// Which embedding notation an image reference used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefSyntax {
    /// Markdown image `![alt](path)`
    Inline {
        /// Alt text between the square brackets
        alt: String,
        /// Path between the parentheses
        path: String,
    },
    /// Embed `![[target]]`; the target serves as both path and alt text
    Embed {
        /// Target between the double brackets
        target: String,
    },
}

/// A single image reference found in note content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Parsed syntax variant
    pub syntax: RefSyntax,

    /// Byte offset of the match in the source content
    pub offset: usize,

    /// Full matched text, verbatim
    pub text: String,
}

impl ImageRef {
    pub(crate) fn from_captures(cap: &Captures<'_>) -> Self {
        let full = cap.get(0).expect("match group 0");
        let syntax = match cap.get(3) {
            Some(target) => RefSyntax::Embed {
                target: target.as_str().to_string(),
            },
            None => RefSyntax::Inline {
                alt: cap.get(1).map(|m| m.as_str()).unwrap_or_default().to_string(),
                path: cap.get(2).map(|m| m.as_str()).unwrap_or_default().to_string(),
            },
        };
        Self {
            syntax,
            offset: full.start(),
            text: full.as_str().to_string(),
        }
    }

    /// Alt text with any `|size` annotation stripped
    pub fn alt(&self) -> &str {
        let raw = match &self.syntax {
            RefSyntax::Inline { alt, .. } => alt,
            RefSyntax::Embed { target } => target,
        };
        first_segment(raw)
    }

    /// Referenced path with any `|size` annotation stripped
    ///
    /// Returns `None` when the path segment is empty; callers treat that as
    /// a warning condition, not a crash.
    pub fn path(&self) -> Option<&str> {
        let raw = match &self.syntax {
            RefSyntax::Inline { path, .. } => path,
            RefSyntax::Embed { target } => target,
        };
        let segment = first_segment(raw);
        if segment.is_empty() {
            None
        } else {
            Some(segment)
        }
    }
}

/// Segment before the first `|`, e.g. `img.png|600` -> `img.png`
fn first_segment(raw: &str) -> &str {
    raw.split('|').next().unwrap_or(raw)
}

/// Scan content for image references
///
/// Returns non-overlapping matches in document order. Read-only; the content
/// is never modified.
pub fn scan_image_refs(content: &str) -> Vec<ImageRef> {
    IMAGE_REF_REGEX
        .captures_iter(content)
        .map(|cap| ImageRef::from_captures(&cap))
        .collect()
}
