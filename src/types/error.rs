//! Error types for the fund-loads engine
//!
//! This module defines all failures that can occur while decoding and
//! evaluating load events. A business rejection (limit exceeded) is NOT an
//! error: it is a normal [`Decision`](super::Decision) with
//! `accepted: false` on the decision stream.
//!
//! # Error categories
//!
//! - **Conflict**: empty or duplicate transaction identifier; the event is
//!   dropped with a diagnostic, no decision is emitted.
//! - **Malformed input**: undecodable JSON line or unparseable load amount;
//!   the event is dropped with a diagnostic.
//! - **Not-found**: internal store signal; the engine handles it inline
//!   (zero daily baseline, weekly bootstrap) and it never reaches a user.
//! - **I/O**: fatal at the input reader, diagnostic everywhere else.

use thiserror::Error;

/// Main error type for the fund-loads engine
///
/// Every variant is recoverable at the pipeline level by skipping the
/// event; only the input reader treats `IoError` as fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VelocityError {
    /// The event carried an empty transaction identifier
    ///
    /// Conflict. The event is dropped; no decision is emitted.
    #[error("transaction must have an id")]
    EmptyTransactionId,

    /// A transaction with this (id, customer) pair was already recorded
    ///
    /// Conflict. Replayed events are dropped, not re-decided.
    #[error("transaction {id} already exists for customer {customer}")]
    DuplicateTransaction {
        /// Transaction identifier that collided
        id: String,
        /// Customer the identifier was already recorded for
        customer: String,
    },

    /// No stored aggregate exists for the requested bucket
    ///
    /// Internal signal only. The engine maps it to a zero daily baseline or
    /// the weekly bootstrap; it is never surfaced as a diagnostic.
    #[error("resource not found")]
    NotFound,

    /// The load amount could not be parsed as a decimal
    ///
    /// Malformed input. The event is dropped; no decision is emitted.
    #[error("invalid load amount '{amount}' for transaction {id}")]
    InvalidAmount {
        /// The raw amount string as received
        amount: String,
        /// Transaction identifier of the offending event
        id: String,
    },

    /// A JSON line could not be decoded into a load event
    ///
    /// Malformed input. The line is dropped and processing continues.
    #[error("parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Input line number, when known
        line: Option<u64>,
        /// Description of the decode failure
        message: String,
    },

    /// I/O failure while reading input or writing an outcome
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O failure
        message: String,
    },
}

impl VelocityError {
    /// Create a DuplicateTransaction error
    pub fn duplicate_transaction(id: &str, customer: &str) -> Self {
        VelocityError::DuplicateTransaction {
            id: id.to_string(),
            customer: customer.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, id: &str) -> Self {
        VelocityError::InvalidAmount {
            amount: amount.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a ParseError without a line number
    pub fn parse_error(message: impl Into<String>) -> Self {
        VelocityError::ParseError {
            line: None,
            message: message.into(),
        }
    }

    /// Attach an input line number to a ParseError
    ///
    /// Used by the line reader, which knows the position; other variants
    /// pass through unchanged.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            VelocityError::ParseError { message, .. } => VelocityError::ParseError {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}

// Conversion from io::Error to VelocityError
impl From<std::io::Error> for VelocityError {
    fn from(error: std::io::Error) -> Self {
        VelocityError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to VelocityError
impl From<serde_json::Error> for VelocityError {
    fn from(error: serde_json::Error) -> Self {
        VelocityError::ParseError {
            line: None,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_id(VelocityError::EmptyTransactionId, "transaction must have an id")]
    #[case::duplicate(
        VelocityError::duplicate_transaction("10", "528"),
        "transaction 10 already exists for customer 528"
    )]
    #[case::not_found(VelocityError::NotFound, "resource not found")]
    #[case::invalid_amount(
        VelocityError::invalid_amount("$1x0.00", "7"),
        "invalid load amount '$1x0.00' for transaction 7"
    )]
    #[case::parse_error_with_line(
        VelocityError::ParseError { line: Some(42), message: "missing field `time`".to_string() },
        "parse error at line 42: missing field `time`"
    )]
    #[case::parse_error_without_line(
        VelocityError::parse_error("missing field `time`"),
        "parse error: missing field `time`"
    )]
    #[case::io_error(
        VelocityError::IoError { message: "permission denied".to_string() },
        "I/O error: permission denied"
    )]
    fn test_error_display(#[case] error: VelocityError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_at_line_sets_parse_error_position() {
        let error = VelocityError::parse_error("bad json").at_line(7);
        assert_eq!(
            error,
            VelocityError::ParseError {
                line: Some(7),
                message: "bad json".to_string()
            }
        );
    }

    #[test]
    fn test_at_line_leaves_other_variants_alone() {
        let error = VelocityError::EmptyTransactionId.at_line(7);
        assert_eq!(error, VelocityError::EmptyTransactionId);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: VelocityError = io_error.into();
        assert!(matches!(error, VelocityError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: denied");
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: VelocityError = json_error.into();
        assert!(matches!(error, VelocityError::ParseError { line: None, .. }));
    }
}
