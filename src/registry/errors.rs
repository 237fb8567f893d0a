//! # Registry Errors
//!
//! Validation and store errors pass through with their original kind and
//! code; the registry adds the ownership failure plus three declared kinds
//! with no triggering path in any current operation.

use thiserror::Error;

use crate::identity::Principal;
use crate::store::{DocId, StoreError};
use crate::validation::ValidationError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Not document owner: {caller} does not own document {id}")]
    NotDocumentOwner { id: DocId, caller: Principal },

    /// Declared for the admin-principal concept; never constructed by any
    /// current operation.
    #[error("Admin operation denied")]
    AdminOperationDenied,

    /// Declared for a permission-gated path; never constructed by any
    /// current operation.
    #[error("Permission denied")]
    PermissionDenied,

    /// Declared for a restricted read path; never constructed by any
    /// current operation.
    #[error("Reading restricted")]
    ReadingRestricted,
}

impl RegistryError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::Validation(e) => e.code(),
            RegistryError::Store(e) => e.code(),
            RegistryError::NotDocumentOwner { .. } => "DEED_NOT_DOCUMENT_OWNER",
            RegistryError::AdminOperationDenied => "DEED_ADMIN_OPERATION_DENIED",
            RegistryError::PermissionDenied => "DEED_PERMISSION_DENIED",
            RegistryError::ReadingRestricted => "DEED_READING_RESTRICTED",
        }
    }
}
