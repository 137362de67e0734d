//! Record parser
//!
//! Converts generic JSON values, as produced by the JSON source, into
//! structured [`Operation`] values. The expected record shape is:
//!
//! ```json
//! {
//!   "id": 441945886,
//!   "state": "EXECUTED",
//!   "date": "2019-08-26T10:50:58.294041",
//!   "operationAmount": {
//!     "amount": "31957.58",
//!     "currency": { "name": "руб.", "code": "RUB" }
//!   },
//!   "description": "Перевод организации",
//!   "from": "Maestro 1596837868705199",
//!   "to": "Счет 64686473678894779589"
//! }
//! ```
//!
//! An empty object (or `null`) is an absent record and yields `Ok(None)`.
//! Every other failure is returned to the caller; nothing is skipped here.

use crate::types::{Counterparties, Currency, FeedError, Operation, OperationAmount};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};
use tracing::debug;

/// Date/time layouts accepted before falling back to RFC 3339 and bare dates
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a single record
///
/// # Returns
///
/// * `Ok(Some(Operation))` for a complete record
/// * `Ok(None)` for an absent record (`{}` or `null`)
/// * `Err(FeedError)` if a required field is missing or has the wrong shape
pub fn parse_record(record: &Value) -> Result<Option<Operation>, FeedError> {
    let fields = match record {
        Value::Null => return Ok(None),
        Value::Object(fields) if fields.is_empty() => return Ok(None),
        Value::Object(fields) => fields,
        other => {
            return Err(FeedError::malformed_record(format!(
                "expected an object, got {}",
                other
            )))
        }
    };

    let id = {
        let value = require(fields, &["id"])?;
        value
            .as_i64()
            .ok_or_else(|| FeedError::type_coercion("id", value))?
    };
    let state = require_str(fields, &["state"])?;
    let date = parse_date(&require_str(fields, &["date"])?)?;
    let amount = parse_amount(require(fields, &["operationAmount", "amount"])?)?;
    let currency = Currency {
        name: require_str(fields, &["operationAmount", "currency", "name"])?,
        code: require_str(fields, &["operationAmount", "currency", "code"])?,
    };
    let description = require_str(fields, &["description"])?;

    let counterparties = match (optional_side(fields, "from")?, optional_side(fields, "to")?) {
        (Some(from), Some(to)) => Counterparties::Transfer { from, to },
        (None, Some(to)) => Counterparties::Incoming { to },
        (None, None) => Counterparties::Unspecified,
        (Some(_), None) => return Err(FeedError::UnpairedCounterparty { id }),
    };

    Ok(Some(Operation {
        id,
        state,
        date,
        operation_amount: OperationAmount { amount, currency },
        description,
        counterparties,
    }))
}

/// Parse every record of a decoded input, stopping at the first failure
pub fn parse_records(records: &[Value]) -> Result<Vec<Option<Operation>>, FeedError> {
    let operations = records
        .iter()
        .map(parse_record)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        records = operations.len(),
        absent = operations.iter().filter(|op| op.is_none()).count(),
        "parsed operation records"
    );

    Ok(operations)
}

/// Parse an ISO-8601 date/time string
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.f]]`, the same with a space separator,
/// RFC 3339 with an offset (kept as wall-clock time) and a bare `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDateTime, FeedError> {
    for format in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(date);
        }
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.naive_local());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|e| FeedError::date_format(raw, e))
}

/// Coerce an amount given either as a JSON number or a numeric string
///
/// Infinite and NaN values are rejected.
fn parse_amount(value: &Value) -> Result<f64, FeedError> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };

    amount
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| FeedError::type_coercion("operationAmount.amount", value))
}

/// Walk a nested path of object keys
fn lookup<'a>(fields: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(fields.get(*first)?, |value, key| value.get(*key))
}

/// Look up a required field; `null` counts as missing
fn require<'a>(fields: &'a Map<String, Value>, path: &[&str]) -> Result<&'a Value, FeedError> {
    match lookup(fields, path) {
        None | Some(Value::Null) => Err(FeedError::missing_field(&path.join("."))),
        Some(value) => Ok(value),
    }
}

fn require_str(fields: &Map<String, Value>, path: &[&str]) -> Result<String, FeedError> {
    let value = require(fields, path)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FeedError::type_coercion(&path.join("."), value))
}

/// Read an optional `from`/`to` side; missing, `null` and blank strings are "no value"
fn optional_side(fields: &Map<String, Value>, key: &str) -> Result<Option<String>, FeedError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(side)) if side.trim().is_empty() => Ok(None),
        Some(Value::String(side)) => Ok(Some(side.clone())),
        Some(other) => Err(FeedError::type_coercion(key, other)),
    }
}
