//! # API Errors
//!
//! API errors are pass-through: registry error codes are preserved
//! unchanged. The API adds only the invalid-request kind for malformed
//! JSON or unknown operations.

use std::fmt;

use crate::registry::RegistryError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API error with preserved registry error code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: String,
    message: String,
}

impl ApiError {
    /// Malformed JSON or unknown operation
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: "DEED_INVALID_REQUEST".to_string(),
            message: reason.into(),
        }
    }

    /// Pass-through from a registry error
    pub fn from_registry_error(err: RegistryError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self::from_registry_error(err)
    }
}
