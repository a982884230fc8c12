//! Lexical path helpers shared by discovery and the preprocessor.
//!
//! Paths are compared by equality (the ignore set), so everything that gets
//! compared must go through the same absolutize/normalize treatment. The
//! normalization here is purely lexical — no symlink resolution — so a path
//! compares equal regardless of how the caller spelled it, without requiring
//! it to exist.

use std::path::{Component, Path, PathBuf};

/// Resolves `path` against `base` if it is relative, then normalizes the
/// result. `base` must be absolute.
pub(crate) fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Folds `.` and `..` components out of a path without touching the
/// filesystem. `..` at the root stays at the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
