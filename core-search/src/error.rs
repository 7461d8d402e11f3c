//! Error types for dataset search

use thiserror::Error;

/// Dataset search errors
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport failure while querying the catalog
    #[error("Search request failed: {0}")]
    Fetch(#[from] bridge_http::HttpError),

    /// The backend answered with a non-2xx status
    #[error("Search rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The hit envelope was not the expected JSON shape
    #[error("Invalid search payload: {0}")]
    Decode(String),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
