//! Error Handling
//!
//! Unified error type for the task dispatcher.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;
use tributa_core::CoreError;
use tributa_llm::LlmError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// `dispatch` called with a persona that has no handler
    #[error("No handler registered for persona: {0}")]
    UnknownPersona(String),

    /// Chat-completion failures (missing key, upstream status, network)
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownPersona(name) => AppError::UnknownPersona(name),
            CoreError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Convert AppError to a string for callers that render errors as text
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
