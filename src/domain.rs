pub mod buckets;
pub mod classifier;
pub mod router;

pub use buckets::{load_buckets, Bucket, BucketLoad, ConfigWarning};
pub use classifier::{MoveOutcome, MoveRecord, Session};
pub use router::{HotkeyConflict, InputRouter, SelectionEvent};

use crate::error::{Result, SorterError};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted by the enumerator. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["JPG", "jpg", "jpeg", "png", "bmp"];

/// Returns true when the path carries one of the allow-listed extensions
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Lists the images directly inside `folder`.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - absolute paths, in directory iteration order
/// * `Err(SorterError::FolderUnreadable)` - the folder cannot be resolved or listed
///
/// # Behavior
/// - Does not recurse into subdirectories
/// - Symlinks are not followed and never listed
/// - Entries that cannot be inspected are skipped
pub fn discover_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |source| SorterError::FolderUnreadable {
        path: folder.to_path_buf(),
        source,
    };

    let root = fs::canonicalize(folder).map_err(unreadable)?;
    let entries = fs::read_dir(&root).map_err(unreadable)?;

    let mut images = Vec::new();
    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(_) => continue,
        };

        // file_type() does not traverse symlinks
        let is_regular = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_regular {
            continue;
        }

        let path = entry.path();
        if is_image(&path) {
            images.push(path);
        }
    }

    Ok(images)
}
