//! LLM Types
//!
//! Request options, results, messages, and errors for chat-completion calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tributa_core::PersonaId;

/// Default sampling temperature when neither the persona nor the caller sets one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default cap on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Message role in a chat-completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Per-call overrides. Unset fields fall back to the persona profile, then to
/// the router defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl SendOptions {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Outcome of one chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    /// Text of the first choice (empty if the API returned none)
    pub content: String,
    /// Model that served the request
    pub model: String,
    /// Total tokens reported by the API (0 if unreported)
    pub tokens: u64,
    /// Cost in USD computed from the local price table
    pub cost: f64,
    /// Wall-clock duration of the HTTP round trip
    pub processing_time_ms: u64,
    /// Persona the call was made for, if any
    pub persona: Option<PersonaId>,
}

/// Coarse classification of a non-success HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    Authentication,
    RateLimited,
    InvalidRequest,
    Server,
    Other,
}

impl UpstreamKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => UpstreamKind::Authentication,
            429 => UpstreamKind::RateLimited,
            400 | 404 | 422 => UpstreamKind::InvalidRequest,
            500..=599 => UpstreamKind::Server,
            _ => UpstreamKind::Other,
        }
    }
}

/// Errors from the chat-completion client.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured; raised before any network call
    #[error("API key not configured for {provider}")]
    MissingApiKey { provider: String },

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    /// Non-success HTTP response from the chat API
    #[error("Upstream error (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

impl LlmError {
    /// Status classification for upstream errors; `None` for everything else.
    pub fn upstream_kind(&self) -> Option<UpstreamKind> {
        match self {
            LlmError::Upstream { status, .. } => Some(UpstreamKind::from_status(*status)),
            _ => None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        LlmError::Config {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::NetworkError {
            message: err.to_string(),
        }
    }
}
