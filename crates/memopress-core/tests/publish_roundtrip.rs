//! End-to-end publishing tests
//!
//! Exercises the full pipeline against a real directory layout and verifies
//! the write-then-read round trip.

use memopress_core::{read_content, write_memo, Frontmatter, Publisher, RewriteWarning};
use chrono::Local;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    _root: TempDir,
    notes: std::path::PathBuf,
    site_assets: std::path::PathBuf,
    site_memos: std::path::PathBuf,
}

fn fixture() -> Fixture {
    let root = TempDir::new().unwrap();
    let notes = root.path().join("vault");
    let site_assets = root.path().join("site/assets/img");
    let site_memos = root.path().join("site/_memos");
    for dir in [&notes, &site_assets, &site_memos] {
        fs::create_dir_all(dir).unwrap();
    }
    Fixture {
        _root: root,
        notes,
        site_assets,
        site_memos,
    }
}

#[test]
fn memo_body_round_trips_through_reader() {
    let fx = fixture();
    let body = "First paragraph.\n\nSecond paragraph with *markdown*.\n";
    let front_matter = Frontmatter::memo("Round Trip", Local::now());
    let memo_path = fx.site_memos.join("round-trip.md");

    write_memo(&memo_path, &front_matter, body).unwrap();
    let read_back = read_content(&memo_path).unwrap();

    assert_eq!(read_back, body);
}

#[test]
fn publish_converts_note_with_mixed_image_syntaxes() {
    let fx = fixture();
    fs::write(fx.notes.join("photo.jpg"), b"jpg").unwrap();
    fs::write(fx.notes.join("diagram.png"), b"png").unwrap();

    let note = fx.notes.join("2024-06-15-trip_to-the_coast.md");
    fs::write(
        &note,
        "---\nold: front matter\ntags: [stale]\n---\n\
         A photo: ![sunset](photo.jpg)\n\nA diagram: ![[diagram.png|480]]\n",
    )
    .unwrap();

    let publisher = Publisher::new(&fx.notes, &fx.site_assets, &fx.site_memos);
    let memo = publisher.publish_note(&note).unwrap();

    assert_eq!(memo.title, "Trip To The Coast");
    assert_eq!(memo.slug, "trip-to-the-coast");
    assert!(memo.warnings.is_empty());
    assert!(fx.site_assets.join("photo.jpg").exists());
    assert!(fx.site_assets.join("diagram.png").exists());

    let written = fs::read_to_string(&memo.dest_path).unwrap();
    assert!(written.starts_with("---\nlayout: memo\ntitle: Trip To The Coast\n"));
    assert!(written.contains("tags:\n- memo\n"));
    assert!(!written.contains("stale"));
    // Both syntaxes come out as inline references with a leading slash.
    assert!(written.contains(&format!(
        "![sunset](/{})",
        fx.site_assets.join("photo.jpg").display()
    )));
    assert!(written.contains(&format!(
        "![diagram.png](/{})",
        fx.site_assets.join("diagram.png").display()
    )));
}

#[test]
fn publish_keeps_unresolved_references_and_reports_them() {
    let fx = fixture();
    let note = fx.notes.join("broken-links.md");
    fs::write(&note, "Missing: ![[nowhere.png]]\nEmpty: ![label]()\n").unwrap();

    let publisher = Publisher::new(&fx.notes, &fx.site_assets, &fx.site_memos);
    let memo = publisher.publish_note(&note).unwrap();

    assert_eq!(memo.title, "Broken Links");
    assert_eq!(memo.warnings.len(), 2);
    assert!(matches!(memo.warnings[0], RewriteWarning::MissingSource { .. }));
    assert!(matches!(memo.warnings[1], RewriteWarning::MissingPath { .. }));

    // The memo is still written, original tags intact.
    let written = fs::read_to_string(&memo.dest_path).unwrap();
    assert!(written.contains("![[nowhere.png]]"));
    assert!(written.contains("![label]()"));
}

#[test]
fn publishing_twice_overwrites_the_same_memo() {
    let fx = fixture();
    let note = fx.notes.join("daily_log.md");
    fs::write(&note, "version one\n").unwrap();

    let publisher = Publisher::new(&fx.notes, &fx.site_assets, &fx.site_memos);
    let first = publisher.publish_note(&note).unwrap();

    fs::write(&note, "version two\n").unwrap();
    let second = publisher.publish_note(&note).unwrap();

    assert_eq!(first.dest_path, second.dest_path);
    let written = fs::read_to_string(&second.dest_path).unwrap();
    assert!(written.contains("version two"));
    assert!(!written.contains("version one"));
}
