//! Error types for the operation feed
//!
//! This module defines all error types that can occur while loading, parsing
//! and formatting operation records. Errors are designed to be descriptive
//! and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: File not found, I/O failures, malformed JSON
//! - **Record Errors**: Missing fields, values of the wrong type, bad dates
//! - **Display Errors**: Identifiers too short to be masked
//!
//! None of these are recovered locally: a failing record aborts the whole feed.

use thiserror::Error;

/// Main error type for the operation feed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input is not a valid JSON array of records
    #[error("JSON error at line {line}, column {column}: {message}")]
    JsonError {
        line: usize,
        column: usize,
        message: String,
    },

    /// A record is neither an object nor an absent marker
    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },

    /// A required field is absent from a non-empty record
    ///
    /// Nested fields are reported with their dotted path,
    /// e.g. `operationAmount.currency.code`.
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    /// A field is present but cannot be interpreted as the expected type
    #[error("Field '{field}' has invalid value {value}")]
    TypeCoercion {
        field: String,
        /// JSON rendering of the offending value
        value: String,
    },

    /// The date field is not an ISO-8601 date/time
    #[error("Invalid date '{value}': {message}")]
    DateFormat { value: String, message: String },

    /// A source identifier was given without a destination
    #[error("Operation {id} has a source account but no destination account")]
    UnpairedCounterparty { id: i64 },

    /// An identifier is shorter than its masking format requires
    #[error("Cannot mask {kind} identifier: need at least {required} characters, got {actual}")]
    MaskingInputTooShort {
        /// `card` or `account`
        kind: String,
        required: usize,
        actual: usize,
    },
}

// Conversion from io::Error to FeedError
impl From<std::io::Error> for FeedError {
    fn from(error: std::io::Error) -> Self {
        FeedError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to FeedError
impl From<serde_json::Error> for FeedError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return FeedError::IoError {
                message: error.to_string(),
            };
        }

        FeedError::JsonError {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl FeedError {
    /// Create a MissingField error
    pub fn missing_field(field: &str) -> Self {
        FeedError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create a TypeCoercion error from the offending JSON value
    pub fn type_coercion(field: &str, value: &serde_json::Value) -> Self {
        FeedError::TypeCoercion {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a DateFormat error
    pub fn date_format(value: &str, message: impl ToString) -> Self {
        FeedError::DateFormat {
            value: value.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a MaskingInputTooShort error
    pub fn masking_input_too_short(kind: &str, required: usize, actual: usize) -> Self {
        FeedError::MaskingInputTooShort {
            kind: kind.to_string(),
            required,
            actual,
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(message: impl ToString) -> Self {
        FeedError::MalformedRecord {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::file_not_found(
        FeedError::FileNotFound { path: "operations.json".to_string() },
        "File not found: operations.json"
    )]
    #[case::io_error(
        FeedError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::missing_field(
        FeedError::MissingField { field: "operationAmount.currency.code".to_string() },
        "Missing required field 'operationAmount.currency.code'"
    )]
    #[case::type_coercion(
        FeedError::TypeCoercion { field: "operationAmount.amount".to_string(), value: "\"abc\"".to_string() },
        "Field 'operationAmount.amount' has invalid value \"abc\""
    )]
    #[case::date_format(
        FeedError::DateFormat { value: "14/10/2018".to_string(), message: "input contains invalid characters".to_string() },
        "Invalid date '14/10/2018': input contains invalid characters"
    )]
    #[case::unpaired(
        FeedError::UnpairedCounterparty { id: 7 },
        "Operation 7 has a source account but no destination account"
    )]
    #[case::masking(
        FeedError::MaskingInputTooShort { kind: "card".to_string(), required: 10, actual: 4 },
        "Cannot mask card identifier: need at least 10 characters, got 4"
    )]
    fn test_error_display(#[case] error: FeedError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::missing_field(
        FeedError::missing_field("id"),
        FeedError::MissingField { field: "id".to_string() }
    )]
    #[case::type_coercion(
        FeedError::type_coercion("id", &json!("one")),
        FeedError::TypeCoercion { field: "id".to_string(), value: "\"one\"".to_string() }
    )]
    #[case::masking(
        FeedError::masking_input_too_short("account", 4, 2),
        FeedError::MaskingInputTooShort { kind: "account".to_string(), required: 4, actual: 2 }
    )]
    fn test_helper_functions(#[case] result: FeedError, #[case] expected: FeedError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: FeedError = io_error.into();
        assert!(matches!(error, FeedError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_json_error_conversion_keeps_position() {
        let json_error = serde_json::from_str::<serde_json::Value>("[\n  {\"id\": }\n]").unwrap_err();
        let error: FeedError = json_error.into();
        match error {
            FeedError::JsonError { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected JsonError, got {:?}", other),
        }
    }
}
