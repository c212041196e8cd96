//! JSON line format handling for load events and decisions
//!
//! This module centralizes the wire format concerns:
//! - decoding one UTF-8 JSON line into a [`LoadEvent`]
//! - encoding one [`Decision`] as a JSON line
//! - rendering a diagnostic message for the error channel
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Decision, LoadEvent, VelocityError};

/// Decode one JSON line into a load event
///
/// Expects an object with fields `id`, `customer_id`, `load_amount`
/// (string, optionally `$`-prefixed) and `time` (RFC 3339 with offset).
/// The load amount is not parsed here; the engine does that during
/// evaluation.
///
/// # Errors
///
/// Returns [`VelocityError::ParseError`] (without a line position; the
/// reader attaches one) if the line is not a well-formed event object.
pub fn decode_event(line: &str) -> Result<LoadEvent, VelocityError> {
    Ok(serde_json::from_str(line)?)
}

/// Encode a decision as a JSON line
///
/// Produces `{"id":...,"customer_id":...,"accepted":...}` with exactly
/// that field order and no trailing newline.
///
/// # Errors
///
/// Returns [`VelocityError::ParseError`] if serialization fails; with
/// string and bool fields this does not occur in practice.
pub fn encode_decision(decision: &Decision) -> Result<String, VelocityError> {
    Ok(serde_json::to_string(decision)?)
}

/// Render a diagnostic line for the error channel
///
/// Free-text format consumed by the logging collaborator:
/// `msg: <context> error: <cause>`.
pub fn diagnostic(context: &str, cause: &VelocityError) -> String {
    format!("msg: {} error: {}", context, cause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rstest::rstest;

    #[test]
    fn test_decode_valid_event() {
        let line = r#"{"id":"15887","customer_id":"528","load_amount":"$3318.47","time":"2000-01-01T00:00:00Z"}"#;
        let event = decode_event(line).unwrap();

        assert_eq!(event.id, "15887");
        assert_eq!(event.customer_id, "528");
        assert_eq!(event.load_amount, "$3318.47");
        assert_eq!(
            event.time,
            DateTime::parse_from_rfc3339("2000-01-01T00:00:00Z").unwrap()
        );
    }

    #[test]
    fn test_decode_event_with_offset_timestamp() {
        let line = r#"{"id":"1","customer_id":"100","load_amount":"10.00","time":"2000-01-03T23:30:00-05:00"}"#;
        let event = decode_event(line).unwrap();
        assert_eq!(event.time.offset().local_minus_utc(), -5 * 3600);
    }

    #[rstest]
    #[case::not_json("not json at all")]
    #[case::truncated(r#"{"id":"1","customer_id":"#)]
    #[case::missing_time(r#"{"id":"1","customer_id":"100","load_amount":"$1.00"}"#)]
    #[case::missing_amount(r#"{"id":"1","customer_id":"100","time":"2000-01-01T00:00:00Z"}"#)]
    #[case::bad_timestamp(r#"{"id":"1","customer_id":"100","load_amount":"$1.00","time":"yesterday"}"#)]
    #[case::numeric_id(r#"{"id":1,"customer_id":"100","load_amount":"$1.00","time":"2000-01-01T00:00:00Z"}"#)]
    fn test_decode_malformed_lines(#[case] line: &str) {
        let result = decode_event(line);
        assert!(matches!(
            result.unwrap_err(),
            VelocityError::ParseError { line: None, .. }
        ));
    }

    #[test]
    fn test_encode_decision_field_order() {
        let decision = Decision {
            id: "123".to_string(),
            customer_id: "321".to_string(),
            accepted: false,
        };
        assert_eq!(
            encode_decision(&decision).unwrap(),
            r#"{"id":"123","customer_id":"321","accepted":false}"#
        );
    }

    #[test]
    fn test_encode_accepted_decision() {
        let decision = Decision {
            id: "1".to_string(),
            customer_id: "100".to_string(),
            accepted: true,
        };
        assert_eq!(
            encode_decision(&decision).unwrap(),
            r#"{"id":"1","customer_id":"100","accepted":true}"#
        );
    }

    #[test]
    fn test_diagnostic_format() {
        let cause = VelocityError::duplicate_transaction("10", "528");
        assert_eq!(
            diagnostic("error processing transaction 10", &cause),
            "msg: error processing transaction 10 error: transaction 10 already exists for customer 528"
        );
    }
}
