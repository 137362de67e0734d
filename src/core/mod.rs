//! Core business logic module
//!
//! This module contains the operation feed components:
//! - `traits` - The record source seam
//! - `parser` - Generic records into structured operations
//! - `masking` - Card and account identifier masking
//! - `formatter` - Display blocks for a single operation
//! - `selection` - Filtering, ordering and emission of the latest operations
//! - `feed` - Pipeline orchestration

pub mod feed;
pub mod formatter;
pub mod masking;
pub mod parser;
pub mod selection;
pub mod traits;

pub use feed::{FeedConfig, OperationFeed};
pub use formatter::format_operation;
pub use masking::{mask_account, mask_card, IdentifierKind};
pub use parser::{parse_record, parse_records};
pub use selection::{select_and_format, DEFAULT_LIMIT};
pub use traits::RecordSource;
