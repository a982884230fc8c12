//! Discovery of `.loc.json` files under a source folder.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use ignore::WalkBuilder;

use crate::{error::Error, paths};

/// The discovery pattern: every `.loc.json` file anywhere under the source
/// folder, including at its top level.
pub const LOC_JSON_GLOB: &str = "**/*.loc.json";

/// Recursively finds every `.loc.json` file under `src_folder`, excluding
/// those listed in `files_to_ignore`.
///
/// `src_folder` must already be absolute; the returned paths are absolute
/// and normalized. Ignore entries may be absolute or relative to
/// `src_folder`. The walk is sorted by file name, so discovery order is
/// stable across runs.
///
/// # Returns
///
/// The matching paths in walk order, or an [`Error`] if the glob cannot be
/// built or the walk fails.
pub fn find_loc_json_files(
    src_folder: &Path,
    files_to_ignore: &[PathBuf],
) -> Result<Vec<PathBuf>, Error> {
    let ignored: HashSet<PathBuf> = files_to_ignore
        .iter()
        .map(|path| paths::absolutize(src_folder, path))
        .collect();

    // literal_separator keeps `*` from matching across directory boundaries;
    // `**/` carries the recursion.
    let matcher = GlobBuilder::new(LOC_JSON_GLOB)
        .literal_separator(true)
        .build()?
        .compile_matcher();

    // Standard filters off: discovery is a plain glob over the tree, not a
    // gitignore-aware walk.
    let walker = WalkBuilder::new(src_folder)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let is_match = match path.strip_prefix(src_folder) {
            Ok(relative) => matcher.is_match(relative),
            Err(_) => matcher.is_match(&path),
        };
        if is_match && !ignored.contains(&path) {
            found.push(path);
        }
    }

    Ok(found)
}
