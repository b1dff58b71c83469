//! extract.rs - Typed field extraction over the shared patterns.
//!
//! Thin helpers the file readers call to pull one field out of a raw line or
//! token. The `capture_*` functions return the matched text; absence of a
//! match is a normal negative outcome, not an error. The `parse_*` functions
//! additionally convert the capture to a numeric type and report failures as
//! [`SimfileIoError`], chaining the parse error as the cause when one exists.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::SimfileIoError;
use crate::patterns;

/// Returns the first run of decimal digits in `input`, or `None` if the
/// input contains no digits.
pub fn capture_integer(input: &str) -> Option<&str> {
    patterns::INTEGER
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the first run of word characters in `input`, or `None` if the
/// input contains no word characters.
pub fn capture_word(input: &str) -> Option<&str> {
    patterns::WORD
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the first decimal number (with a literal decimal point) in
/// `input`, or `None` if no such number is present.
pub fn capture_float(input: &str) -> Option<&str> {
    patterns::FLOAT
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts and parses the first integer field in `input`.
///
/// # Errors
///
/// Returns a [`SimfileIoError`] when `input` contains no digits, or when the
/// digit run does not fit in an `i64` (the original `ParseIntError` is
/// chained as the cause).
pub fn parse_integer(input: &str) -> Result<i64, SimfileIoError> {
    let Some(digits) = capture_integer(input) else {
        debug!("no integer field found in {input:?}");
        return Err(SimfileIoError::msg(format!(
            "no integer field found in {input:?}"
        )));
    };
    digits.parse::<i64>().map_err(|e| {
        SimfileIoError::with_cause(format!("integer field {digits:?} is out of range"), e)
    })
}

/// Extracts and parses the first float field in `input`.
///
/// Integer-shaped values without a decimal point are not float fields and
/// yield an error, matching the FLOAT pattern's contract.
///
/// # Errors
///
/// Returns a [`SimfileIoError`] when `input` contains no float-shaped field,
/// or when the captured text fails `f64` parsing (the original
/// `ParseFloatError` is chained as the cause).
pub fn parse_float(input: &str) -> Result<f64, SimfileIoError> {
    let Some(text) = capture_float(input) else {
        debug!("no float field found in {input:?}");
        return Err(SimfileIoError::msg(format!(
            "no float field found in {input:?}"
        )));
    };
    text.parse::<f64>().map_err(|e| {
        SimfileIoError::with_cause(format!("float field {text:?} failed to parse"), e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_capture_helpers_mirror_pattern_groups() {
        assert_eq!(capture_integer("step 42 done"), Some("42"));
        assert_eq!(capture_word("[heading]"), Some("heading"));
        assert_eq!(capture_float("T = 300.0 K"), Some("300.0"));
        assert_eq!(capture_float("T = 300 K"), None);
    }

    #[test]
    fn test_parse_integer_round_trips_capture() {
        assert_eq!(parse_integer("frame=107").unwrap(), 107);
    }

    #[test]
    fn test_parse_integer_no_digits_is_message_only() {
        let err = parse_integer("no numbers here").unwrap_err();
        assert!(err.message().unwrap().contains("no integer field"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_integer_overflow_chains_cause() {
        let err = parse_integer("id=99999999999999999999999").unwrap_err();
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn test_parse_float_respects_decimal_point_rule() {
        assert_eq!(parse_float("  -3.14xyz").unwrap(), -3.14);
        assert!(parse_float("value=42").is_err());
    }
}
