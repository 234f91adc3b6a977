//! JSON Configuration Management
//!
//! Reads and writes the dispatcher configuration file.

use std::fs;
use std::path::Path;

use crate::models::settings::AgentConfig;
use crate::utils::error::{AppError, AppResult};

/// Load configuration from a JSON file and apply environment overrides.
pub fn load_config(path: &Path) -> AppResult<AgentConfig> {
    let content = fs::read_to_string(path)?;
    let config: AgentConfig = serde_json::from_str(&content)?;
    let config = config.with_env_overrides();
    config.validate().map_err(AppError::validation)?;
    Ok(config)
}

/// Save configuration to a file with pretty formatting.
///
/// The API key is never written.
pub fn save_config(path: &Path, config: &AgentConfig) -> AppResult<()> {
    config.validate().map_err(AppError::validation)?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
