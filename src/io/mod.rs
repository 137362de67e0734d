//! I/O module
//!
//! Handles JSON input and plain-text output.
//!
//! # Components
//!
//! - `json_source` - JSON array decoding and the file-backed record source
//! - `text_output` - Line emission to a writer

pub mod json_source;
pub mod text_output;

pub use json_source::{decode_records, JsonFileSource};
pub use text_output::write_lines;
