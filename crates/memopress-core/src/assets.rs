//! Image asset copying

use std::fs;
use std::path::Path;
use tracing::warn;

/// Copy an image from `source` to `dest` if the source exists
///
/// Returns `true` when the bytes were copied (destination created or
/// overwritten), `false` when the source does not exist. A copy that fails
/// mid-flight is logged and reported as `false` as well; there is no retry
/// and no partial-copy cleanup.
pub fn copy_image(source: &Path, dest: &Path) -> bool {
    if !source.exists() {
        return false;
    }
    match fs::copy(source, dest) {
        Ok(_) => true,
        Err(err) => {
            warn!(
                source = %source.display(),
                dest = %dest.display(),
                %err,
                "image copy failed"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copies_existing_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("pic.png");
        let dest = dir.path().join("out.png");
        fs::write(&source, b"fake png bytes").unwrap();

        assert!(copy_image(&source, &dest));
        assert_eq!(fs::read(&dest).unwrap(), b"fake png bytes");
    }

    #[test]
    fn test_overwrites_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("pic.png");
        let dest = dir.path().join("out.png");
        fs::write(&source, b"new").unwrap();
        fs::write(&dest, b"old contents").unwrap();

        assert!(copy_image(&source, &dest));
        assert_eq!(fs::read(&dest).unwrap(), b"new");
    }

    #[test]
    fn test_missing_source_returns_false() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("nope.png");
        let dest = dir.path().join("out.png");

        assert!(!copy_image(&source, &dest));
        assert!(!dest.exists());
    }
}
