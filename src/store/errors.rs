//! # Store Errors

use thiserror::Error;

use super::document::DocId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document and permission store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocId),

    /// Internal-consistency guard; unreachable under correct counter
    /// discipline but checked on every insert.
    #[error("Document already exists: {0}")]
    DocumentAlreadyExists(DocId),
}

impl StoreError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::DocumentNotFound(_) => "DEED_DOC_NOT_FOUND",
            StoreError::DocumentAlreadyExists(_) => "DEED_DOC_ALREADY_EXISTS",
        }
    }
}
