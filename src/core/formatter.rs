//! Display formatter
//!
//! Turns one [`Operation`] into its human-readable block:
//!
//! ```text
//! 14.10.2018 Перевод организации
//! Visa Platinum 7000 79** **** 6361 -> Счет **9638
//! 82771.72 руб.
//!
//! ```
//!
//! The counterparty line is omitted when the operation has no counterparties,
//! and shows the destination alone when only the destination is known. Every
//! block ends with an empty separator line.
//!
//! All functions here are pure; writing the lines out is left to the caller.

use crate::core::masking::{is_short_side, IdentifierKind};
use crate::types::{Counterparties, FeedError, Operation};

/// Date layout of the first line (`DD.MM.YYYY`)
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format one operation as display lines, including the trailing blank line
pub fn format_operation(operation: &Operation) -> Result<Vec<String>, FeedError> {
    let mut lines = vec![format!(
        "{} {}",
        operation.date.format(DATE_FORMAT),
        operation.description
    )];

    if let Some(line) = counterparty_line(&operation.counterparties)? {
        lines.push(line);
    }

    lines.push(format!(
        "{} {}",
        format_amount(operation.operation_amount.amount),
        operation.operation_amount.currency.name
    ));
    lines.push(String::new());

    Ok(lines)
}

/// Render the `from -> to` line, if the operation has one
fn counterparty_line(counterparties: &Counterparties) -> Result<Option<String>, FeedError> {
    match counterparties {
        Counterparties::Transfer { from, to } => Ok(Some(format!(
            "{} -> {}",
            mask_side(from)?,
            mask_side(to)?
        ))),
        Counterparties::Incoming { to } => mask_side(to).map(Some),
        Counterparties::Unspecified => Ok(None),
    }
}

/// Mask one counterparty side
///
/// The label stays in front of the masked identifier, except for short sides,
/// which are masked as bare account numbers.
pub fn mask_side(side: &str) -> Result<String, FeedError> {
    let (label, identifier) = split_side(side);
    let masked = IdentifierKind::classify(side, &label).mask(identifier)?;

    if label.is_empty() || is_short_side(side) {
        Ok(masked)
    } else {
        Ok(format!("{label} {masked}"))
    }
}

/// Split a side into `(label, identifier)`
///
/// The last whitespace-separated token is the identifier; the preceding
/// tokens joined by single spaces form the label, which may be empty.
pub fn split_side(side: &str) -> (String, &str) {
    let tokens: Vec<&str> = side.split_whitespace().collect();
    match tokens.as_slice() {
        [] => (String::new(), ""),
        [identifier] => (String::new(), *identifier),
        [label @ .., identifier] => (label.join(" "), *identifier),
    }
}

/// Render an amount in its shortest round-trip decimal form
///
/// Integral values keep a trailing `.0` (`100.0`), fractional values are
/// printed as stored (`82771.72`); no rounding to a fixed precision.
/// Magnitudes of at least `1e16` or below `1e-4` use a signed, two-digit
/// exponent (`1e+16`, `2.5e-07`).
pub fn format_amount(amount: f64) -> String {
    let rendered = format!("{:?}", amount);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}
