//! Directory helpers: relative paths, recursive copy, and guarded
//! recursive removal.
//!
//! These are blocking `std::fs` operations; callers on an async runtime
//! should wrap them in their executor's blocking facility.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::DirError;

/// Expresses `path` relative to `base`.
///
/// # Errors
///
/// [`DirError::NotRelative`] when `path` does not start with `base`.
pub fn relative_to(path: &Path, base: &Path) -> Result<PathBuf, DirError> {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .map_err(|_| DirError::NotRelative {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })
}

/// Recursively copies `source` into `destination`.
///
/// Missing destination directories (including parents) are created;
/// existing files are overwritten with the corresponding source file.
/// Returns the number of files copied.
///
/// # Errors
///
/// [`DirError::SourceNotDirectory`] when `source` is missing or not a
/// directory, [`DirError::DestinationNotDirectory`] when `destination`
/// exists as a non-directory, and IO/walk errors from the copy itself.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<u64, DirError> {
    if !source.is_dir() {
        return Err(DirError::SourceNotDirectory {
            path: source.to_path_buf(),
        });
    }
    if destination.exists() && !destination.is_dir() {
        return Err(DirError::DestinationNotDirectory {
            path: destination.to_path_buf(),
        });
    }
    fs::create_dir_all(destination)?;

    let mut copied = 0_u64;
    for entry in WalkDir::new(source) {
        let entry = entry?;
        if let Ok(relative) = entry.path().strip_prefix(source) {
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else if entry.file_type().is_file() {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &target)?;
                copied += 1;
            }
        }
    }

    debug!(
        "copied {} files from {} to {}",
        copied,
        source.display(),
        destination.display()
    );
    Ok(copied)
}

/// Removes `directory` and everything under it.
///
/// The directory must be strictly inside `container`; both paths are
/// canonicalized before the check, so neither symlinked spellings nor `..`
/// segments can sidestep the guard. Nothing is deleted when validation
/// fails.
///
/// # Errors
///
/// [`DirError::MissingDirectory`] when `directory` is missing or not a
/// directory, [`DirError::OutsideContainer`] when it is not strictly inside
/// `container`, and IO errors from the removal itself.
pub fn remove_tree(directory: &Path, container: &Path) -> Result<(), DirError> {
    if !directory.is_dir() {
        return Err(DirError::MissingDirectory {
            path: directory.to_path_buf(),
        });
    }

    let canonical_dir = dunce::canonicalize(directory)?;
    let canonical_container = dunce::canonicalize(container)?;

    if canonical_dir == canonical_container || !canonical_dir.starts_with(&canonical_container) {
        return Err(DirError::OutsideContainer {
            path: canonical_dir,
            container: canonical_container,
        });
    }

    fs::remove_dir_all(&canonical_dir)?;
    info!("removed directory tree {}", canonical_dir.display());
    Ok(())
}
