//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `operation`: Operation records, amounts and counterparties
//! - `error`: Error types for the operation feed

pub mod error;
pub mod operation;

pub use error::FeedError;
pub use operation::{
    Counterparties, Currency, Operation, OperationAmount, OperationId, EXECUTED,
};
