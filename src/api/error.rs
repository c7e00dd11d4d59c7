//! Error types for API client operations
//!
//! Two layers: [`TransportError`] for failures of the network collaborator
//! and [`ApiError`] for everything that can cross the client boundary,
//! including decode failures.

use thiserror::Error;

use crate::decode::DecodeError;

/// Errors produced by the transport collaborator
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced an HTTP response
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status; the server's error body is captured for diagnostics
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Server-supplied error body text (may be empty)
        body: String,
    },

    /// The response body was not parseable as JSON at all
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors crossing the API client boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed before a JSON body was obtained
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    /// The transport succeeded but the body was not a JSON object
    #[error("response body is not a JSON object")]
    UnexpectedResponse,

    /// The body was a JSON object but did not match the endpoint's shape
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
