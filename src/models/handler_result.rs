//! Handler Results
//!
//! The value returned to callers for each dispatched task.

use serde::{Deserialize, Serialize};
use tributa_core::PersonaId;
use tributa_llm::ChatResult;

/// Outcome of one dispatched task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResult {
    pub success: bool,
    /// Model response text
    pub result: String,
    pub persona: PersonaId,
    /// Semantic category of the persona ("code", "architecture", ...)
    #[serde(rename = "type")]
    pub result_type: String,
    pub model: String,
    pub tokens: u64,
    /// Cost in USD
    pub cost: f64,
    pub processing_time_ms: u64,
    /// Project-relative paths of the files embedded in the prompt
    pub files_modified: Vec<String>,
}

impl HandlerResult {
    pub fn from_chat(persona: PersonaId, chat: ChatResult, files: Vec<String>) -> Self {
        Self {
            success: true,
            result: chat.content,
            persona,
            result_type: persona.category().to_string(),
            model: chat.model,
            tokens: chat.tokens,
            cost: chat.cost,
            processing_time_ms: chat.processing_time_ms,
            files_modified: files,
        }
    }
}
