//! Tributa Agents
//!
//! Dispatches development and support tasks to specialized AI personas over
//! an OpenRouter-compatible chat-completion API.
//! It includes:
//! - The task dispatcher and one prompt handler per persona
//! - File context loading for code-producing personas
//! - Configuration models and JSON persistence
//! - Error types shared across the crate

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::{AgentConfig, HandlerResult};
pub use services::{recommended_persona, FileContextLoader, TaskDispatcher};
pub use storage::{load_config, save_config};
pub use utils::error::{AppError, AppResult};

// Re-export the workspace crates' main types
pub use tributa_core::{PersonaId, Task};
pub use tributa_llm::{
    ChatProvider, ChatResult, LlmError, MetricsSink, MetricsSnapshot, PromptRouter, RouterConfig,
    SendOptions, UsageMetrics,
};
