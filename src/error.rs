//! Error types for the P2PB2B client library.

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

use crate::types::ApiMessage;

/// The main error type for all P2PB2B client operations.
#[derive(Error, Debug)]
pub enum P2bError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A header value could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// The server answered with a status outside the accepted set
    #[error("HTTP response status != {expected:?}, got {actual}")]
    UnexpectedStatus {
        /// Status codes the endpoint accepts
        expected: Vec<u16>,
        /// Status code actually received
        actual: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// P2PB2B API returned `success: false`
    #[error("P2PB2B API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret must both be non-empty")]
    MissingCredentials,
}

impl P2bError {
    /// Build an [`P2bError::UnexpectedStatus`] from the expected set and the received status.
    pub(crate) fn unexpected_status(expected: &[StatusCode], actual: StatusCode, body: &[u8]) -> Self {
        Self::UnexpectedStatus {
            expected: expected.iter().map(StatusCode::as_u16).collect(),
            actual: actual.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// The HTTP status carried by this error, if it is a status mismatch.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

/// An error reported by the P2PB2B API in the response body.
///
/// The exchange signals failures with `"success": false` and a `message`
/// that is either a string or a nested array of strings such as
/// `[["Key not provided."]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The message as returned by the server
    pub message: ApiMessage,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.message.flatten().join("; ");
        if text.is_empty() {
            write!(f, "request failed without a message")
        } else {
            write!(f, "{}", text)
        }
    }
}

impl ApiError {
    /// Create a new API error from a server message.
    pub fn new(message: ApiMessage) -> Self {
        Self { message }
    }

    /// Check if the server rejected the request because no key was sent.
    pub fn is_key_not_provided(&self) -> bool {
        self.contains("Key not provided")
    }

    fn contains(&self, needle: &str) -> bool {
        let needle = needle.to_ascii_lowercase();
        self.message
            .flatten()
            .iter()
            .any(|m| m.to_ascii_lowercase().contains(&needle))
    }
}
