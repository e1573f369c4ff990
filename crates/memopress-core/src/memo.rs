//! Memo output
//!
//! Serializes a front matter block plus body to the destination file, and
//! composes the whole note-to-memo pipeline behind [`Publisher`].

use crate::error::{PublishError, PublishResult};
use crate::frontmatter::{self, Frontmatter};
use crate::rewrite::{rewrite_image_paths, RewriteWarning};
use crate::slug::slugify;
use crate::title::title_from_filename;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write a memo file: front matter block, `---` separator, body
///
/// Creates or truncates the destination. The body gets a terminating newline
/// unless it already ends with one. A failure mid-write can leave a
/// truncated file behind; there is no recovery at this level.
pub fn write_memo(path: &Path, front_matter: &Frontmatter, content: &str) -> PublishResult<()> {
    let yaml = serde_yaml::to_string(front_matter)?;
    let mut file = File::create(path)?;
    write!(file, "---\n{yaml}---\n{content}")?;
    if !content.ends_with('\n') {
        writeln!(file)?;
    }
    Ok(())
}

/// A successfully published memo
#[derive(Debug, Clone)]
pub struct PublishedMemo {
    /// Title extracted from the note filename
    pub title: String,

    /// Slug the destination filename was derived from
    pub slug: String,

    /// Where the memo was written
    pub dest_path: PathBuf,

    /// Image references that could not be resolved
    pub warnings: Vec<RewriteWarning>,
}

/// The note-to-memo pipeline
///
/// Holds the directory layout and runs one note at a time, synchronously:
/// read and strip front matter, rewrite image references (copying assets),
/// extract the title, build fresh front matter, write the memo. Directory
/// creation is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Publisher {
    image_source_dir: PathBuf,
    image_dest_dir: PathBuf,
    memo_dest_dir: PathBuf,
}

impl Publisher {
    /// Create a publisher for the given directory layout
    pub fn new(
        image_source_dir: impl Into<PathBuf>,
        image_dest_dir: impl Into<PathBuf>,
        memo_dest_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image_source_dir: image_source_dir.into(),
            image_dest_dir: image_dest_dir.into(),
            memo_dest_dir: memo_dest_dir.into(),
        }
    }

    /// Publish a single note file as a memo
    ///
    /// Unresolvable image references are collected on the returned
    /// [`PublishedMemo`] rather than failing the note; only I/O errors on
    /// the note or memo file itself are fatal.
    pub fn publish_note(&self, note_path: &Path) -> PublishResult<PublishedMemo> {
        let body = frontmatter::read_content(note_path)?;

        let outcome = rewrite_image_paths(&body, &self.image_source_dir, &self.image_dest_dir);

        let filename = note_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| PublishError::invalid_path(note_path))?;
        let title = title_from_filename(filename);
        let slug = slugify(&title);

        let front_matter = Frontmatter::memo(&title, creation_time(note_path)?);

        let dest_path = self.memo_dest_dir.join(format!("{slug}.md"));
        write_memo(&dest_path, &front_matter, &outcome.content)?;

        debug!(
            note = %note_path.display(),
            memo = %dest_path.display(),
            warnings = outcome.warnings.len(),
            "published memo"
        );

        Ok(PublishedMemo {
            title,
            slug,
            dest_path,
            warnings: outcome.warnings,
        })
    }
}

/// Creation time of a note, falling back to mtime where birth time is
/// unavailable (common on Linux filesystems)
fn creation_time(path: &Path) -> PublishResult<DateTime<Local>> {
    let metadata = fs::metadata(path)?;
    let time = metadata.created().or_else(|_| metadata.modified())?;
    Ok(DateTime::<Local>::from(time))
}
