//! CLI-specific error types
//!
//! Per-request registry errors are reported inside the response envelope;
//! CLI errors cover only argument and I/O failures and exit non-zero.

use std::fmt;
use std::io;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Bad argument value
    ArgError,
    /// I/O error (stdin/stdout/input file)
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ArgError => "DEED_CLI_ARG_ERROR",
            Self::IoError => "DEED_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Bad argument
    pub fn arg_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ArgError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Returns the code string
    pub fn code(&self) -> &'static str {
        self.code.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CliError::arg_error("x").code(), "DEED_CLI_ARG_ERROR");
        assert_eq!(CliError::io_error("x").code(), "DEED_CLI_IO_ERROR");
    }

    #[test]
    fn test_display() {
        let err = CliError::arg_error("bad principal");
        let text = err.to_string();
        assert!(text.contains("DEED_CLI_ARG_ERROR"));
        assert!(text.contains("bad principal"));
    }
}
