//! JSON record source
//!
//! Decodes a JSON array of operation records into generic values. Record
//! contents are not inspected here; that is the parser's job.
//!
//! # Examples
//!
//! ```no_run
//! use operation_feed::io::JsonFileSource;
//! use operation_feed::RecordSource;
//!
//! let source = JsonFileSource::new("operations.json");
//! let records = source.load().unwrap();
//! println!("Loaded {} records", records.len());
//! ```

use crate::core::traits::RecordSource;
use crate::types::FeedError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::PathBuf;
use tracing::debug;

/// Decode a JSON array of records from a reader
///
/// The top-level value must be an array; its elements are returned as-is.
pub fn decode_records<R: Read>(reader: R) -> Result<Vec<Value>, FeedError> {
    let records: Vec<Value> = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Record source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Value>, FeedError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FeedError::FileNotFound {
                path: self.path.display().to_string(),
            },
            _ => FeedError::from(e),
        })?;

        debug!(path = %self.path.display(), "reading operation records");
        decode_records(BufReader::new(file))
    }
}
