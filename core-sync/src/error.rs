//! Error types for synchronization

use thiserror::Error;

/// Synchronization errors
///
/// In-band step failures inside an [`OperationOutcome`](crate::OperationOutcome)
/// are data, not errors: a step with a 4xx/5xx status is reported to the
/// caller as part of a successful `execute` call. Only transport-level
/// failures and a non-2xx answer to the call itself surface here.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Transport failure while computing a preview
    #[error("Preview request failed: {0}")]
    Preview(bridge_http::HttpError),

    /// The preview call answered non-2xx
    #[error("Preview rejected with status {status}: {body}")]
    PreviewRejected { status: u16, body: String },

    /// Transport failure while executing a copy
    #[error("Copy request failed: {0}")]
    Execute(bridge_http::HttpError),

    /// The copy call answered non-2xx
    #[error("Copy rejected with status {status}: {body}")]
    ExecuteRejected { status: u16, body: String },

    /// The response body was not the expected JSON shape
    #[error("Invalid response payload: {0}")]
    Decode(String),

    /// An attempt was driven through an illegal state transition
    #[error("Invalid attempt transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Result type for synchronization operations
pub type Result<T> = std::result::Result<T, SyncError>;
