//! Response envelope for the JSON operation surface.

use serde::Serialize;
use serde_json::{json, Value};

use super::errors::ApiError;

/// A JSON operation response
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Error payload with the stable code
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl Response {
    /// Successful response with a data payload
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Error response; the code passes through unchanged
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: err.code().to_string(),
                message: err.message().to_string(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Error code when this is an error response
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| json!({"success": false}))
    }
}
