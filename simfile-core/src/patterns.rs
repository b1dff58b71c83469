//! patterns.rs - Precompiled field-extraction patterns.
//!
//! Simulation files interleave the fields we care about with headers, units,
//! and separators. The readers share these three patterns instead of
//! recompiling them at every call site. Each pattern designates a single
//! capturing group holding the extracted field; everything around it is
//! consumed and discarded.
//!
//! The statics are compiled once and never mutated, so they are safe for
//! unrestricted concurrent use from any number of threads.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the first run of decimal digits, tolerating arbitrary non-digit
/// prefix and suffix. Group 1 holds the digits.
pub static INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9]*([0-9]+)[^0-9]*").expect("integer pattern is valid")
});

/// Matches the first run of word characters (letters, digits, underscore),
/// tolerating arbitrary non-word prefix and suffix. Group 1 holds the word.
pub static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\W*(\w+)\W*").expect("word pattern is valid")
});

/// Matches a decimal number after optional leading whitespace, tolerating
/// trailing non-digit content. Group 1 holds the number, including an
/// optional leading minus sign.
///
/// The group requires a literal decimal point and at least one fractional
/// digit: plain integers (`"42"`) do not match. The file readers rely on
/// this to tell float columns from integer columns, so the constraint must
/// stay as-is.
pub static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*(-?[0-9]*\.[0-9]+)[^0-9]*").expect("float pattern is valid")
});
