//! Image path rewriting
//!
//! The one place where scanning, the filesystem, and text rewriting meet:
//! every image reference in a note is resolved against the source directory,
//! the asset is copied into the destination directory, and the reference is
//! rewritten to point at the copy. References that cannot be resolved are
//! left verbatim and reported as warnings.

use crate::assets::copy_image;
use crate::image_refs::{ImageRef, IMAGE_REF_REGEX};
use regex::Captures;
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A non-fatal problem encountered while rewriting image references
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RewriteWarning {
    /// A matched tag has no resolvable path (empty or `|`-only)
    MissingPath {
        /// The tag as matched, verbatim
        tag: String,
    },
    /// The referenced source image does not exist on disk
    MissingSource {
        /// The tag as matched, verbatim
        tag: String,
        /// Resolved source path that was not found
        source: PathBuf,
    },
}

impl fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath { tag } => write!(f, "image path missing in tag: {tag}"),
            Self::MissingSource { source, .. } => {
                write!(f, "image file does not exist: {}", source.display())
            }
        }
    }
}

/// Result of an image path rewrite pass
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// Content with every resolvable reference rewritten
    pub content: String,

    /// Warnings for references left unchanged, in document order
    pub warnings: Vec<RewriteWarning>,
}

/// Rewrite image references in `content`, copying assets as a side effect
///
/// For each match, left to right: resolve the path (size annotation
/// stripped), copy `source_dir/<path>` to `dest_dir/<basename>`, and replace
/// the match with `![alt](/<dest path>)`. The rewritten form always uses the
/// inline syntax with a leading `/`, whichever syntax the note used.
///
/// Unresolvable references pass through unchanged: a missing/empty path or a
/// source file that does not exist yields a [`RewriteWarning`] (also logged
/// at `warn`) and the original text. I/O problems during the copy itself are
/// treated the same as a missing source.
pub fn rewrite_image_paths(content: &str, source_dir: &Path, dest_dir: &Path) -> RewriteOutcome {
    let mut warnings = Vec::new();

    let rewritten = IMAGE_REF_REGEX.replace_all(content, |cap: &Captures<'_>| {
        let image_ref = ImageRef::from_captures(cap);

        let Some(path) = image_ref.path() else {
            warn!(tag = %image_ref.text, "image path missing in tag");
            warnings.push(RewriteWarning::MissingPath {
                tag: image_ref.text.clone(),
            });
            return image_ref.text.clone();
        };

        let source = source_dir.join(path);
        let basename = Path::new(path).file_name().unwrap_or_else(|| OsStr::new(path));
        let dest = dest_dir.join(basename);

        if copy_image(&source, &dest) {
            format!("![{}](/{})", image_ref.alt(), dest.display())
        } else {
            warn!(source = %source.display(), "image file does not exist");
            warnings.push(RewriteWarning::MissingSource {
                tag: image_ref.text.clone(),
                source,
            });
            image_ref.text.clone()
        }
    });

    RewriteOutcome {
        content: rewritten.into_owned(),
        warnings,
    }
}
