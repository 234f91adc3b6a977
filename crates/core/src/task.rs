//! Task Records
//!
//! The caller-supplied unit of work that handlers turn into prompts.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A task to be turned into a persona-specific prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short title
    pub title: String,
    /// Free-form description; may mention files relative to the project root
    pub description: String,
    /// Free-form category tag (e.g. "code", "bug", "feature")
    #[serde(rename = "type")]
    pub task_type: String,
    /// Free-form priority tag (e.g. "low", "high")
    pub priority: String,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        task_type: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            task_type: task_type.into(),
            priority: priority.into(),
        }
    }

    /// Reject tasks missing a title or description.
    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("task title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::validation("task description is required"));
        }
        Ok(())
    }
}
