//! Task Dispatcher
//!
//! Routes a task to the handler for a persona, gathers file context where the
//! persona needs it, sends the prompt, and wraps the response in a
//! [`HandlerResult`].

pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use tributa_core::{PersonaId, Task};
use tributa_llm::{ChatProvider, MetricsSink, PromptRouter, SendOptions};

use crate::models::{AgentConfig, HandlerResult};
use crate::services::context::FileContextLoader;
use crate::utils::error::{AppError, AppResult};

pub use handlers::{build_prompt, recommended_persona, RECOMMENDATION_MARKER};

/// Dispatches tasks to persona handlers.
#[derive(Clone)]
pub struct TaskDispatcher {
    provider: Arc<dyn ChatProvider>,
    files: FileContextLoader,
}

impl TaskDispatcher {
    /// Create a dispatcher that resolves file references against `project_root`.
    pub fn new(provider: Arc<dyn ChatProvider>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            files: FileContextLoader::new(project_root),
        }
    }

    pub fn with_file_loader(mut self, files: FileContextLoader) -> Self {
        self.files = files;
        self
    }

    /// Build a dispatcher backed by a [`PromptRouter`] from `config`.
    pub fn from_config(config: &AgentConfig, metrics: Arc<dyn MetricsSink>) -> AppResult<Self> {
        config.validate().map_err(AppError::Config)?;

        let router = PromptRouter::new(config.router.clone(), metrics)?;
        let files = FileContextLoader::new(config.project_root.clone())
            .with_max_chars(config.max_file_chars);

        Ok(Self::new(Arc::new(router), config.project_root.clone()).with_file_loader(files))
    }

    /// Every persona this dispatcher can handle.
    pub fn personas(&self) -> &'static [PersonaId] {
        &PersonaId::ALL
    }

    pub fn file_loader(&self) -> &FileContextLoader {
        &self.files
    }

    /// Run `task` through the handler for `persona`.
    pub async fn dispatch(&self, persona: PersonaId, task: &Task) -> AppResult<HandlerResult> {
        task.validate()?;

        let files = if persona.reads_files() {
            self.files.load_referenced(&task.description).await
        } else {
            Vec::new()
        };

        tracing::info!(
            persona = %persona,
            files = files.len(),
            "Dispatching task: {}",
            task.title
        );

        let prompt = build_prompt(persona, task, &files);
        let chat = self
            .provider
            .send(Some(persona), &prompt, SendOptions::default())
            .await?;

        let paths = files.into_iter().map(|f| f.path).collect();
        Ok(HandlerResult::from_chat(persona, chat, paths))
    }

    /// Same as [`dispatch`](Self::dispatch), keyed by persona name.
    ///
    /// Unknown names fail before any file or network access.
    pub async fn dispatch_named(&self, persona: &str, task: &Task) -> AppResult<HandlerResult> {
        let persona: PersonaId = persona.parse()?;
        self.dispatch(persona, task).await
    }
}

impl std::fmt::Debug for TaskDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDispatcher")
            .field("files", &self.files)
            .finish_non_exhaustive()
    }
}
