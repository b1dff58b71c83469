// simfile-core/src/lib.rs
//! # Simfile Core Library
//!
//! `simfile-core` provides the shared, platform-independent pieces of the
//! simulation-file I/O layer: the domain error type raised by file readers
//! and writers, and the precompiled patterns those readers use to extract
//! integer, word, and float fields out of raw file content.
//!
//! The library is deliberately small and stateless. Patterns are compiled
//! once into process-wide statics and are safe for unrestricted concurrent
//! use; errors are plain immutable values that propagate up to the caller.
//!
//! ## Modules
//!
//! * `errors`: Defines [`SimfileIoError`], the error kind for simulation-file I/O failures.
//! * `patterns`: The three shared extraction patterns ([`patterns::INTEGER`], [`patterns::WORD`], [`patterns::FLOAT`]).
//! * `extract`: Typed helpers that apply the patterns and parse the captured field.
//!
//! ## Usage Example
//!
//! ```rust
//! use simfile_core::{capture_word, parse_float, parse_integer, SimfileIoError};
//!
//! fn main() -> Result<(), SimfileIoError> {
//!     // Field values arrive embedded in arbitrary surrounding text.
//!     assert_eq!(parse_integer("frame=107")?, 107);
//!     assert_eq!(parse_float("T = 300.5 K")?, 300.5);
//!     assert_eq!(capture_word("[coordinates]"), Some("coordinates"));
//!
//!     // A float field requires a literal decimal point; plain integers
//!     // are not float fields.
//!     assert!(parse_float("T = 300 K").is_err());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`SimfileIoError`], which optionally carries a
//! message and a chained cause retrievable via `std::error::Error::source`.
//! A pattern simply failing to match is not an error: the `capture_*`
//! helpers report it as `None`.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod errors;
pub mod extract;
pub mod patterns;

/// Re-exports the domain error type and its boxed-cause alias.
pub use errors::{BoxedCause, SimfileIoError};

/// Re-exports the typed extraction helpers.
pub use extract::{capture_float, capture_integer, capture_word, parse_float, parse_integer};
