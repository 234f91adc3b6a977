//! Core Error Types
//!
//! Defines the foundational error types shared by the Tributa Agents workspace.
//! Kept dependency-free (only thiserror + std) so the core crate stays small.
//!
//! The LLM crate and the dispatcher crate wrap these in their own error enums.

use thiserror::Error;

/// Core error type for the Tributa Agents workspace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A persona identifier that is not one of the fixed set
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an unknown persona error
    pub fn unknown_persona(name: impl Into<String>) -> Self {
        Self::UnknownPersona(name.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
