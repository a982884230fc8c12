#![forbid(unsafe_code)]
//! Generates TypeScript declaration stubs for `.loc.json` localization files.
//!
//! A `.loc.json` file maps string identifiers to `{ "value": ..., "comment": ... }`
//! records. For every such file under a source folder, this crate emits a
//! `.d.ts` stub exposing each identifier as `export declare const <key>: string;`,
//! written to an output folder that mirrors the source tree.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use locstub::{PreprocessOptions, preprocess_loc_json_files};
//!
//! let options = PreprocessOptions::new("src", "temp/loc-ts");
//! preprocess_loc_json_files(&options)?;
//! # Ok::<(), locstub::Error>(())
//! ```
//!
//! The output folder is emptied on every run, so it only ever contains stubs
//! generated from the current set of inputs. Any failure (unreadable file,
//! malformed JSON, schema violation, write error) aborts the whole run.

pub mod discovery;
pub mod error;
pub mod formats;
mod paths;
pub mod preprocessor;
pub mod stub;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    preprocessor::{PreprocessOptions, preprocess_loc_json_files},
    types::{LocEntry, LocFile},
};
