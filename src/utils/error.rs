//! Error handling for Tabdown formatters
//!
//! This module provides the error type returned by cell formatters. A
//! formatter failure never aborts a render: the renderer substitutes the
//! failure message into the offending cell and reports a diagnostic.

use std::fmt;

/// Formatter error type
#[derive(Debug, Clone)]
pub enum FormatError {
    /// Input text could not be interpreted by the formatter
    InvalidValue { message: String },
    /// Input was understood but the formatter cannot produce output for it
    Unsupported { message: String },
}

impl FormatError {
    pub fn invalid(message: impl Into<String>) -> Self {
        FormatError::InvalidValue {
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        FormatError::Unsupported {
            message: message.into(),
        }
    }

    /// The raw failure message, as substituted into a failed cell
    pub fn message(&self) -> &str {
        match self {
            FormatError::InvalidValue { message } => message,
            FormatError::Unsupported { message } => message,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidValue { message } => {
                write!(f, "Invalid value: {}", message)
            }
            FormatError::Unsupported { message } => {
                write!(f, "Unsupported: {}", message)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type for formatter invocations
pub type FormatResult<T> = Result<T, FormatError>;
