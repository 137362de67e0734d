//! Operation Feed Library
//! # Overview
//!
//! This library reads bank operation records decoded from JSON and renders the
//! most recent executed operations as short, human-readable blocks with card
//! and account numbers masked.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Operation, Counterparties, FeedError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::parser`] - Generic JSON records into operations
//!   - [`core::masking`] - Card and account number masking
//!   - [`core::formatter`] - Display block of a single operation
//!   - [`core::selection`] - Executed-only filtering, date ordering and limiting
//!   - [`core::feed`] - Pipeline orchestration
//! - [`io`] - JSON input and text output
//!
//! # Output Format
//!
//! Each displayed operation produces one block:
//!
//! ```text
//! 10.08.2019 Оплата услуг
//! MasterCard 1234 56** **** 7890 -> Счет **1234
//! 12345.67 USD
//!
//! ```
//!
//! - **Line 1**: date as `DD.MM.YYYY` and description
//! - **Line 2**: masked source and destination, the destination alone, or nothing
//! - **Line 3**: amount and currency name
//! - a blank separator line

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{FeedConfig, OperationFeed, RecordSource};
pub use io::JsonFileSource;
pub use types::{Counterparties, Currency, FeedError, Operation, OperationAmount, OperationId};
