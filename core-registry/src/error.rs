//! Error types for the endpoint registry

use thiserror::Error;

/// Endpoint registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Transport failure while fetching an endpoint list
    #[error("Endpoint fetch failed: {0}")]
    Fetch(#[from] bridge_http::HttpError),

    /// The backend answered with a non-2xx status
    #[error("Endpoint fetch rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The response body was not the expected JSON shape
    #[error("Invalid endpoint payload: {0}")]
    Decode(String),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
