//! Input file formats. The only supported input today is `.loc.json`.

pub mod loc_json;
