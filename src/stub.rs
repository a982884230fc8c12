//! Rendering and writing of generated `.d.ts` declaration stubs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{error::Error, types::LocFile};

/// Warning line emitted at the top of every generated stub.
pub const GENERATED_FILE_HEADER: &str =
    "// This file was generated by a tool. Modifying it will produce unexpected behavior";

/// Line ending used in generated files, following the host platform.
pub const EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Renders the `.d.ts` stub text for a validated localization file.
///
/// The output starts with [`GENERATED_FILE_HEADER`] and a blank line. Each
/// entry then contributes, in file order: a doc block (only if its trimmed
/// comment is non-empty) and an `export declare const <id>: string;` line
/// followed by a blank line. Any `*/` inside a comment is escaped to `*\/`
/// so it cannot terminate the doc block early.
pub fn render(file: &LocFile) -> String {
    let mut lines: Vec<String> = vec![GENERATED_FILE_HEADER.to_string(), String::new()];

    for entry in &file.entries {
        if entry.has_comment() {
            lines.push("/**".to_string());
            lines.push(format!(" * {}", entry.comment.replace("*/", r"*\/")));
            lines.push(" */".to_string());
        }
        lines.push(format!("export declare const {}: string;", entry.id));
        lines.push(String::new());
    }

    lines.join(EOL)
}

/// Computes the output path for a discovered `.loc.json` file: its path
/// relative to `src_folder`, resolved against `generated_ts_folder`, with
/// the literal suffix `.d.ts` appended.
pub fn output_path(
    src_folder: &Path,
    generated_ts_folder: &Path,
    loc_json_path: &Path,
) -> Result<PathBuf, Error> {
    let relative =
        loc_json_path
            .strip_prefix(src_folder)
            .map_err(|_| Error::OutsideSourceFolder {
                path: loc_json_path.to_path_buf(),
                src_folder: src_folder.to_path_buf(),
            })?;
    let mut mirrored = generated_ts_folder.join(relative).into_os_string();
    mirrored.push(".d.ts");
    Ok(PathBuf::from(mirrored))
}

/// Writes rendered stub text to `path`, creating parent directories as
/// needed and overwriting any existing file.
pub fn write_stub(path: &Path, text: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
