//! errors.rs - The domain error type for the simfile-core library.
//!
//! This module defines the single error kind raised by simulation-file I/O
//! operations. Callers can match on it to handle file-I/O failures separately
//! from unrelated errors, and inspect the chained cause for diagnostics.
//!
//! License: MIT OR APACHE 2.0

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed cause stored inside a [`SimfileIoError`].
///
/// `Send + Sync` bounds keep error values freely movable across threads.
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// An error raised while reading or writing simulation-file data.
///
/// Both the message and the underlying cause are optional; the four
/// constructors cover every combination so call sites can attach whatever
/// context they actually have:
///
/// * [`SimfileIoError::new`] - neither message nor cause.
/// * [`SimfileIoError::msg`] - message only.
/// * [`SimfileIoError::caused_by`] - cause only; `Display` derives a
///   description from the cause.
/// * [`SimfileIoError::with_cause`] - both.
///
/// Instances are immutable after construction. Construction never fails.
#[derive(Error, Debug)]
#[error("{}", describe(.message, .cause))]
pub struct SimfileIoError {
    message: Option<String>,
    #[source]
    cause: Option<BoxedCause>,
}

fn describe(message: &Option<String>, cause: &Option<BoxedCause>) -> String {
    match (message, cause) {
        (Some(msg), _) => msg.clone(),
        (None, Some(cause)) => format!("simulation file I/O error: {cause}"),
        (None, None) => "simulation file I/O error".to_string(),
    }
}

impl SimfileIoError {
    /// Creates an error with no message and no recorded cause.
    pub fn new() -> Self {
        Self { message: None, cause: None }
    }

    /// Creates an error carrying the given message and no recorded cause.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
        }
    }

    /// Creates an error chaining the given cause, without an explicit message.
    ///
    /// `Display` falls back to a description derived from the cause; the
    /// cause itself remains retrievable unchanged via
    /// [`std::error::Error::source`].
    pub fn caused_by(cause: impl Into<BoxedCause>) -> Self {
        Self {
            message: None,
            cause: Some(cause.into()),
        }
    }

    /// Creates an error carrying both an explicit message and a chained cause.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxedCause>) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
        }
    }

    /// Returns the explicit message supplied at construction, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for SimfileIoError {
    fn default() -> Self {
        Self::new()
    }
}
