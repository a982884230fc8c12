//! All error types for the locstub crate.
//!
//! These are returned from all fallible operations (discovery, parsing,
//! validation, stub generation). Variants that concern a single input file
//! carry its path so the caller can report which file broke the run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("failed to parse `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid loc.json file `{}`: {message}", path.display())]
    Validation { path: PathBuf, message: String },

    #[error("file `{}` is not inside the source folder `{}`", path.display(), src_folder.display())]
    OutsideSourceFolder { path: PathBuf, src_folder: PathBuf },
}

impl Error {
    /// Creates a new validation error for the given input file.
    pub fn validation(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Validation {
            path: path.into(),
            message: message.into(),
        }
    }
}
