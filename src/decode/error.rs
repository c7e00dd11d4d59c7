//! Error types for JSON decoding
//!
//! Every failure names the offending key and carries enough context
//! (expected vs actual type, or the raw malformed value) to pinpoint the
//! bad field in a response body.

use thiserror::Error;

/// Errors that can occur while decoding a JSON object into a domain record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A required key was absent from the object
    #[error("required key '{0}' is missing")]
    MissingKey(String),

    /// A key was present but held a value of the wrong JSON type
    #[error("unexpected type for '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// The offending key
        key: String,
        /// JSON type the decoder asked for
        expected: &'static str,
        /// JSON type actually present
        actual: &'static str,
    },

    /// A string field did not parse as a URL
    #[error("cannot parse URL '{value}' for key '{key}'")]
    InvalidUrl {
        /// The offending key
        key: String,
        /// The raw string that failed to parse
        value: String,
    },

    /// A string field did not match the API timestamp format
    #[error("cannot parse date '{value}' for key '{key}'")]
    InvalidDate {
        /// The offending key
        key: String,
        /// The raw string that failed to parse
        value: String,
    },
}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
