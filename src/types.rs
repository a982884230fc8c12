//! The data model for validated localization files.

/// A single localized string: its identifier, its translated value, and an
/// explanatory comment for translators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocEntry {
    /// The string identifier (the key in the `.loc.json` object).
    pub id: String,
    /// The translated text.
    pub value: String,
    /// Explanatory comment. May be empty; a whitespace-only comment is
    /// treated the same as an empty one.
    pub comment: String,
}

impl LocEntry {
    /// Whether this entry carries a comment worth emitting, i.e. its comment
    /// is non-empty after trimming.
    pub fn has_comment(&self) -> bool {
        !self.comment.trim().is_empty()
    }
}

/// A validated `.loc.json` file. Entry order equals the key order of the
/// source JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocFile {
    pub entries: Vec<LocEntry>,
}

impl LocFile {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
