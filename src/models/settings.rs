//! Settings Models
//!
//! Dispatcher configuration: chat endpoint settings plus the project root
//! used to resolve files mentioned in task descriptions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tributa_llm::RouterConfig;

use crate::services::context::DEFAULT_MAX_FILE_CHARS;

pub const ENV_PROJECT_ROOT: &str = "TRIBUTA_PROJECT_ROOT";

/// Dispatcher configuration, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Chat-completion endpoint settings
    #[serde(default)]
    pub router: RouterConfig,
    /// Root against which task file references are resolved
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,
    /// Per-file character cap for embedded file contents
    #[serde(default = "default_max_file_chars")]
    pub max_file_chars: usize,
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_file_chars() -> usize {
    DEFAULT_MAX_FILE_CHARS
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            router: RouterConfig::default(),
            project_root: default_project_root(),
            max_file_chars: default_max_file_chars(),
        }
    }
}

impl AgentConfig {
    /// Defaults overlaid with `OPENROUTER_*` and `TRIBUTA_PROJECT_ROOT`.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment variables on top of this config.
    pub fn with_env_overrides(mut self) -> Self {
        self.router = self.router.with_env_overrides();
        if let Some(root) = std::env::var_os(ENV_PROJECT_ROOT).filter(|v| !v.is_empty()) {
            self.project_root = PathBuf::from(root);
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.router.validate()?;

        if self.max_file_chars == 0 {
            return Err("max_file_chars must be greater than zero".to_string());
        }

        if self.project_root.as_os_str().is_empty() {
            return Err("project_root must not be empty".to_string());
        }

        Ok(())
    }
}
