//! Publish command
//!
//! Walks the notes path, runs the pipeline per file, and reports outcomes.
//! Per-file failures do not stop the batch; they are counted and surfaced at
//! the end.

use crate::cli::PublishArgs;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use memopress_core::Publisher;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

pub fn execute(args: PublishArgs) -> Result<()> {
    let notes = collect_notes(&args.notes)
        .with_context(|| format!("collecting notes from {}", args.notes.display()))?;
    if notes.is_empty() {
        println!("no notes found under {}", args.notes.display());
        return Ok(());
    }

    let image_source_dir = args.image_source_dir.unwrap_or_else(|| notes_root(&args.notes));

    // The core leaves directory creation to the driver.
    fs::create_dir_all(&args.memo_dir)
        .with_context(|| format!("creating memo directory {}", args.memo_dir.display()))?;
    fs::create_dir_all(&args.image_dest_dir)
        .with_context(|| format!("creating image directory {}", args.image_dest_dir.display()))?;

    let publisher = Publisher::new(&image_source_dir, &args.image_dest_dir, &args.memo_dir);

    let mut published = 0usize;
    let mut warnings = 0usize;
    let mut failed = 0usize;

    for note in &notes {
        debug!(note = %note.display(), "publishing");
        match publisher.publish_note(note) {
            Ok(memo) => {
                published += 1;
                println!(
                    "{} {} -> {}",
                    "published".green(),
                    memo.title,
                    memo.dest_path.display()
                );
                for warning in &memo.warnings {
                    warnings += 1;
                    println!("  {} {}", "warning:".yellow(), warning);
                }
            }
            Err(err) => {
                failed += 1;
                error!(note = %note.display(), %err, "publish failed");
                println!("{} {}: {}", "failed".red(), note.display(), err);
            }
        }
    }

    println!(
        "{published} published, {warnings} warning{}, {failed} failed",
        if warnings == 1 { "" } else { "s" }
    );

    if failed > 0 {
        bail!("{failed} of {} notes failed to publish", notes.len());
    }
    Ok(())
}

/// Markdown files under `path`, sorted; a single file passes through as-is
fn collect_notes(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut notes = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            notes.push(entry.into_path());
        }
    }
    notes.sort();
    Ok(notes)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

/// Directory image references resolve against when none is given
fn notes_root(notes: &Path) -> PathBuf {
    if notes.is_dir() {
        notes.to_path_buf()
    } else {
        notes.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
    }
}
