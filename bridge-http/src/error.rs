//! Error types for the HTTP bridge

use thiserror::Error;

/// HTTP transport errors
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection-level failure, no response was received
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The request did not complete within the transport timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The request could not be built (bad URL, unserializable body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The response body could not be decoded as the expected shape
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

/// Result type for HTTP bridge operations
pub type Result<T> = std::result::Result<T, HttpError>;
