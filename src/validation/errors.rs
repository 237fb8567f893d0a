//! # Validation Errors

use thiserror::Error;

/// Result type for validation checks
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title or description length outside its bound.
    /// Description bounds report under the same kind as title bounds.
    #[error("Title format: {0}")]
    TitleFormat(String),

    #[error("Filesize limit: {0} outside [1, 1000000000)")]
    FilesizeLimit(u64),

    #[error("Tag validation: {0}")]
    TagValidation(String),
}

impl ValidationError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::TitleFormat(_) => "DEED_TITLE_FORMAT",
            ValidationError::FilesizeLimit(_) => "DEED_FILESIZE_LIMIT",
            ValidationError::TagValidation(_) => "DEED_TAG_VALIDATION",
        }
    }
}
