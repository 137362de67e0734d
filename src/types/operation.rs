//! Operation-related types for the operation feed
//!
//! This module defines the structured form of a bank operation record, as
//! produced by the record parser and consumed by the display formatter.

use chrono::NaiveDateTime;

/// Operation identifier as found in the upstream data
pub type OperationId = i64;

/// State string of an operation eligible for display
pub const EXECUTED: &str = "EXECUTED";

/// Currency of an operation amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// Display name, e.g. `руб.` or `USD`
    pub name: String,

    /// ISO-like currency code, e.g. `RUB`
    pub code: String,
}

/// Amount of an operation together with its currency
#[derive(Debug, Clone, PartialEq)]
pub struct OperationAmount {
    pub amount: f64,
    pub currency: Currency,
}

/// Source and destination identifiers of an operation
///
/// The raw data carries `from` and `to` as two independent optional strings.
/// Only these shapes are meaningful for display; a source without a
/// destination is rejected while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Counterparties {
    /// Money moved from one identifier to another
    Transfer { from: String, to: String },

    /// Only a destination is known (e.g. opening a deposit)
    Incoming { to: String },

    /// Neither side is present
    Unspecified,
}

impl Counterparties {
    /// Source identifier, if any
    pub fn from_account(&self) -> Option<&str> {
        match self {
            Counterparties::Transfer { from, .. } => Some(from.as_str()),
            Counterparties::Incoming { .. } | Counterparties::Unspecified => None,
        }
    }

    /// Destination identifier, if any
    pub fn to_account(&self) -> Option<&str> {
        match self {
            Counterparties::Transfer { to, .. } | Counterparties::Incoming { to } => Some(to.as_str()),
            Counterparties::Unspecified => None,
        }
    }
}

/// One bank operation
///
/// Constructed once from an input record and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: OperationId,

    /// Lifecycle state, treated as an opaque string (`EXECUTED`, `CANCELLED`, ...)
    pub state: String,

    /// Wall-clock date and time of the operation
    pub date: NaiveDateTime,

    pub operation_amount: OperationAmount,

    pub description: String,

    pub counterparties: Counterparties,
}

impl Operation {
    /// Whether the operation is in the executed state
    ///
    /// Exact, case-sensitive comparison against [`EXECUTED`].
    pub fn is_executed(&self) -> bool {
        self.state == EXECUTED
    }
}
