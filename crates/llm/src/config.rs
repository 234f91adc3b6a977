//! Router Configuration
//!
//! Connection settings for the chat-completion endpoint. OpenRouter is the
//! default target; any OpenAI-compatible base URL works.

use serde::{Deserialize, Serialize};

/// Default OpenRouter API base (the router appends `/chat/completions`)
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model used when a call has no persona and no model override
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_BASE_URL: &str = "OPENROUTER_BASE_URL";
pub const ENV_DEFAULT_MODEL: &str = "OPENROUTER_DEFAULT_MODEL";

/// Configuration for [`crate::PromptRouter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Bearer token; calls fail fast when absent
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Sent as `HTTP-Referer`
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Sent as `X-Title`
    #[serde(default = "default_app_title")]
    pub app_title: String,
    /// Optional client-side timeout; unset means the call waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_referer() -> String {
    "https://tributa.ai".to_string()
}

fn default_app_title() -> String {
    "Tributa.AI".to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: default_model(),
            referer: default_referer(),
            app_title: default_app_title(),
            request_timeout_secs: None,
        }
    }
}

impl RouterConfig {
    /// Defaults overlaid with `OPENROUTER_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `OPENROUTER_*` environment variables on top of this config.
    /// Empty values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = non_empty_env(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_empty_env(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(model) = non_empty_env(ENV_DEFAULT_MODEL) {
            self.default_model = model;
        }
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// The configured key, trimmed; `None` when unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Full chat-completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Full model-listing endpoint URL.
    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!("Invalid base_url: {}", self.base_url));
        }
        if self.default_model.trim().is_empty() {
            return Err("default_model must not be empty".to_string());
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
