//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every repository/gateway failure is converted into one of these at
/// the point of the call; nothing propagates as a panic. Recovery is
/// always caller-initiated retry.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Collection or single-record retrieval failed
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Record absent on the backend
    #[error("car not found: {0}")]
    NotFound(String),

    /// Image gateway rejected the upload or was unreachable
    #[error("upload failed: {0}")]
    Upload(String),

    /// Creation rejected by the backend
    #[error("create failed: {0}")]
    Create(String),

    /// Submission rejected; carries the server-supplied message when
    /// one was available
    #[error("update failed: {0}")]
    Update(String),

    /// Deletion failed; the record remains
    #[error("delete failed: {0}")]
    Delete(String),

    /// Payload rejected client-side before any call was issued
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
