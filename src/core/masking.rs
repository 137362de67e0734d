//! Identifier masking
//!
//! Card numbers are shown as `XXXX XX** **** XXXX` and account numbers as
//! `**XXXX`. Lengths are counted in characters, not bytes. Identifiers too
//! short for their format are rejected with
//! [`FeedError::MaskingInputTooShort`] instead of being padded.

use crate::types::FeedError;

/// Minimum card identifier length: 4 leading, 2 middle and 4 trailing characters
pub const CARD_MIN_LEN: usize = 10;

/// Minimum account identifier length: 4 trailing characters
pub const ACCOUNT_MIN_LEN: usize = 4;

/// Sides up to this length are bare account numbers shown without their label
const ACCOUNT_SIDE_MAX_LEN: usize = 6;

/// Labels that mark the identifier as an account number (compared lowercase)
const ACCOUNT_LABELS: [&str; 3] = ["счет", "счёт", "account"];

/// Mask a card number as `XXXX XX** **** XXXX`
///
/// The input must be the bare identifier; any label is stripped by the caller.
///
/// # Examples
///
/// ```
/// use operation_feed::core::masking::mask_card;
///
/// assert_eq!(mask_card("1234567890123456").unwrap(), "1234 56** **** 3456");
/// ```
pub fn mask_card(identifier: &str) -> Result<String, FeedError> {
    let chars: Vec<char> = identifier.chars().collect();
    if chars.len() < CARD_MIN_LEN {
        return Err(FeedError::masking_input_too_short(
            "card",
            CARD_MIN_LEN,
            chars.len(),
        ));
    }

    let head: String = chars[..4].iter().collect();
    let middle: String = chars[4..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();

    Ok(format!("{head} {middle}** **** {tail}"))
}

/// Mask an account number as `**XXXX`
///
/// # Examples
///
/// ```
/// use operation_feed::core::masking::mask_account;
///
/// assert_eq!(mask_account("1234567890").unwrap(), "**7890");
/// ```
pub fn mask_account(identifier: &str) -> Result<String, FeedError> {
    let chars: Vec<char> = identifier.chars().collect();
    if chars.len() < ACCOUNT_MIN_LEN {
        return Err(FeedError::masking_input_too_short(
            "account",
            ACCOUNT_MIN_LEN,
            chars.len(),
        ));
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    Ok(format!("**{tail}"))
}

/// Whether an unsplit side is short enough to be masked as a bare account
///
/// Short sides are rendered without their label.
pub fn is_short_side(side: &str) -> bool {
    side.chars().count() <= ACCOUNT_SIDE_MAX_LEN
}

/// Kind of a counterparty identifier, selecting its masking format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Card,
    Account,
}

impl IdentifierKind {
    /// Decide how a counterparty side should be masked
    ///
    /// `side` is the full, unsplit string (e.g. `Visa Platinum 7000792289606361`)
    /// and `label` the part preceding the identifier. A label naming an
    /// account wins; otherwise sides longer than six characters are cards.
    pub fn classify(side: &str, label: &str) -> Self {
        let label = label.to_lowercase();
        if ACCOUNT_LABELS.contains(&label.as_str()) {
            return IdentifierKind::Account;
        }

        if is_short_side(side) {
            IdentifierKind::Account
        } else {
            IdentifierKind::Card
        }
    }

    /// Apply the masking function for this kind
    pub fn mask(self, identifier: &str) -> Result<String, FeedError> {
        match self {
            IdentifierKind::Card => mask_card(identifier),
            IdentifierKind::Account => mask_account(identifier),
        }
    }
}
