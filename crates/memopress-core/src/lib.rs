//! Memopress core
//!
//! A single-pass pipeline that turns plain note files into publishable
//! "memo" documents:
//! - strip any existing front matter
//! - rewrite embedded image references against a copied asset directory
//! - derive a title from the filename convention
//! - emit a fresh YAML front matter block plus body
//!
//! Everything is synchronous; the only side effects are single blocking
//! filesystem calls. Per-image problems are collected warnings, never
//! failures.

pub mod assets;
pub mod error;
pub mod frontmatter;
pub mod image_refs;
pub mod memo;
pub mod rewrite;
pub mod slug;
pub mod title;

// Re-export main types for convenience
pub use assets::copy_image;
pub use error::{PublishError, PublishResult};
pub use frontmatter::{read_content, strip_front_matter, Frontmatter};
pub use image_refs::{scan_image_refs, ImageRef, RefSyntax};
pub use memo::{write_memo, PublishedMemo, Publisher};
pub use rewrite::{rewrite_image_paths, RewriteOutcome, RewriteWarning};
pub use slug::slugify;
pub use title::title_from_filename;
