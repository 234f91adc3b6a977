//! Chat Provider Trait
//!
//! The seam between prompt assembly and the chat-completion transport.
//! [`crate::PromptRouter`] is the production implementation; tests can swap
//! in a recording double.

use async_trait::async_trait;
use tributa_core::PersonaId;

use crate::types::{ChatResult, LlmError, LlmResult, SendOptions};

/// Anything that can answer a single persona-scoped chat message.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one user message.
    ///
    /// # Arguments
    /// * `persona` - Persona whose profile supplies model, system prompt and
    ///   temperature; `None` uses the provider defaults
    /// * `message` - The user message
    /// * `options` - Per-call overrides
    async fn send(
        &self,
        persona: Option<PersonaId>,
        message: &str,
        options: SendOptions,
    ) -> LlmResult<ChatResult>;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::MissingApiKey {
        provider: provider.to_string(),
    }
}

/// Helper function to wrap a non-success HTTP response
pub fn parse_http_error(status: u16, body: &str) -> LlmError {
    LlmError::Upstream {
        status,
        body: body.to_string(),
    }
}
