//! The top-level preprocessing operation.
//!
//! This module sequences the whole run: resolve the input set, empty the
//! output folder, then validate and emit a stub for each input in discovery
//! order. There is no concurrency and no recovery; the first error aborts
//! the run and propagates to the caller, leaving any stubs written so far in
//! place.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{discovery, error::Error, formats::loc_json, paths, stub};

/// Options for [`preprocess_loc_json_files`].
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    /// Root folder to scan for `.loc.json` files. Relative paths are
    /// resolved against the current directory.
    pub src_folder: PathBuf,
    /// Root folder for generated `.d.ts` stubs. Emptied and recreated on
    /// every run.
    pub generated_ts_folder: PathBuf,
    /// Files to exclude from processing, relative to `src_folder` or
    /// absolute. Empty by default.
    pub files_to_ignore: Vec<PathBuf>,
}

impl PreprocessOptions {
    /// Creates options with an empty ignore list.
    pub fn new(src_folder: impl Into<PathBuf>, generated_ts_folder: impl Into<PathBuf>) -> Self {
        PreprocessOptions {
            src_folder: src_folder.into(),
            generated_ts_folder: generated_ts_folder.into(),
            files_to_ignore: Vec::new(),
        }
    }
}

/// Generates one `.d.ts` stub for every non-ignored `.loc.json` file under
/// the source folder, mirroring the source tree under the output folder.
///
/// The output folder is emptied before the first stub is written, so after a
/// successful run it contains exactly the stubs for the current input set.
///
/// # Returns
///
/// `Ok(())` once every input has been processed, or the first [`Error`]
/// encountered. On failure, stubs written before the failure remain on disk;
/// there is no rollback.
pub fn preprocess_loc_json_files(options: &PreprocessOptions) -> Result<(), Error> {
    let cwd = env::current_dir()?;
    let src_folder = paths::absolutize(&cwd, &options.src_folder);
    let generated_ts_folder = paths::absolutize(&cwd, &options.generated_ts_folder);

    let loc_json_files = discovery::find_loc_json_files(&src_folder, &options.files_to_ignore)?;

    ensure_empty_folder(&generated_ts_folder)?;

    for loc_json_path in loc_json_files {
        let loc_file = loc_json::read_from(&loc_json_path)?;
        let text = stub::render(&loc_file);
        let output = stub::output_path(&src_folder, &generated_ts_folder, &loc_json_path)?;
        stub::write_stub(&output, &text)?;
    }

    Ok(())
}

/// Deletes `path` and everything under it if it exists, then recreates it
/// (including missing parents).
fn ensure_empty_folder(path: &Path) -> Result<(), Error> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}
