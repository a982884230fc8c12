//! A parser and validator for `.loc.json` localization files.
//!
//! The on-disk format is a JSON object mapping string identifiers to records
//! of the shape `{ "value": "...", "comment": "..." }`. The schema is fixed:
//! the top level must be an object, every member must be an object with
//! exactly a string `value` and a string `comment`, nothing else. Key order
//! in the source file is preserved.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::Error,
    types::{LocEntry, LocFile},
};

/// The raw shape of one entry as it appears on disk. Kept separate from
/// [`LocEntry`] so schema enforcement stays in this module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    value: String,
    comment: String,
}

/// Reads and validates a `.loc.json` file.
///
/// # Parameters
/// - `path`: Path to the `.loc.json` file.
///
/// # Returns
///
/// A [`LocFile`] whose entries follow the key order of the source file, or
/// an [`Error`] naming `path` if the content is unparsable or violates the
/// schema.
pub fn read_from<P: AsRef<Path>>(path: P) -> Result<LocFile, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse(path, &content)
}

/// Validates already-loaded `.loc.json` content. `path` is only used for
/// error reporting.
pub fn parse(path: &Path, content: &str) -> Result<LocFile, Error> {
    // With serde_json's `preserve_order` feature, Map iterates in insertion
    // order, which is the key order of the source file.
    let raw: Map<String, Value> = serde_json::from_str(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::with_capacity(raw.len());
    for (id, value) in raw {
        let raw_entry: RawEntry = serde_json::from_value(value)
            .map_err(|e| Error::validation(path, format!("entry `{}`: {}", id, e)))?;
        entries.push(LocEntry {
            id,
            value: raw_entry.value,
            comment: raw_entry.comment,
        });
    }

    Ok(LocFile { entries })
}
