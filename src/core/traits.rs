//! Core traits for the operation feed
//!
//! The feed never touches files or JSON grammar itself; it pulls already
//! decoded records through [`RecordSource`], so tests can hand it records
//! directly.

use crate::types::FeedError;
use serde_json::Value;

/// Trait for anything that can provide decoded operation records
///
/// Each record is a generic JSON value, normally an object shaped like
/// an operation, `{}` for an absent operation.
pub trait RecordSource {
    /// Load every record, in input order
    fn load(&self) -> Result<Vec<Value>, FeedError>;
}

/// Records already held in memory
impl RecordSource for Vec<Value> {
    fn load(&self) -> Result<Vec<Value>, FeedError> {
        Ok(self.clone())
    }
}
