//! Error types for audit log retrieval

use thiserror::Error;

/// Audit log retrieval errors
#[derive(Error, Debug)]
pub enum LogError {
    /// Transport failure while fetching a page
    #[error("Log fetch failed: {0}")]
    Fetch(#[from] bridge_http::HttpError),

    /// The backend answered with a non-2xx status
    #[error("Log fetch rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The page payload was not the expected JSON shape
    #[error("Invalid log payload: {0}")]
    Decode(String),

    /// A wire timestamp could not be parsed
    #[error("Unparseable timestamp {value:?} in log entry {entry_id}")]
    Timestamp { entry_id: i64, value: String },
}

/// Result type for log store operations
pub type Result<T> = std::result::Result<T, LogError>;
