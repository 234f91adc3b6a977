//! Prompt Router
//!
//! Sends one persona-scoped message to an OpenAI-compatible chat-completion
//! endpoint (OpenRouter by default), prices the call, and records usage.
//!
//! Each call is independent: no retry, no caching, no queuing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tributa_core::PersonaId;

use crate::config::RouterConfig;
use crate::http_client::build_http_client;
use crate::metrics::MetricsSink;
use crate::pricing::CostCalculator;
use crate::profiles::PersonaProfile;
use crate::provider::{missing_api_key_error, parse_http_error, ChatProvider};
use crate::types::{ChatMessage, ChatResult, LlmError, LlmResult, SendOptions, DEFAULT_MAX_TOKENS};

const PROVIDER_NAME: &str = "openrouter";

/// Chat-completion client with persona profiles and usage tracking.
pub struct PromptRouter {
    config: RouterConfig,
    client: reqwest::Client,
    pricing: CostCalculator,
    metrics: Arc<dyn MetricsSink>,
}

impl PromptRouter {
    /// Create a router that records every successful call into `metrics`.
    ///
    /// A missing API key is not an error here; it fails each `send`.
    pub fn new(config: RouterConfig, metrics: Arc<dyn MetricsSink>) -> LlmResult<Self> {
        config.validate().map_err(LlmError::config)?;
        let client = build_http_client(config.request_timeout_secs.map(Duration::from_secs))?;
        tracing::info!(
            "Prompt router initialized: url={}, default_model={}",
            config.completions_url(),
            config.default_model
        );
        Ok(Self {
            config,
            client,
            pricing: CostCalculator::new(),
            metrics,
        })
    }

    /// Replace the price table.
    pub fn with_pricing(mut self, pricing: CostCalculator) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn pricing(&self) -> &CostCalculator {
        &self.pricing
    }

    /// The sink every successful call is recorded into.
    pub fn metrics(&self) -> Arc<dyn MetricsSink> {
        Arc::clone(&self.metrics)
    }

    /// Send `message` as `persona` (or with the defaults when `None`).
    pub async fn send(
        &self,
        persona: Option<PersonaId>,
        message: &str,
        options: SendOptions,
    ) -> LlmResult<ChatResult> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| missing_api_key_error(PROVIDER_NAME))?;

        let profile = match persona {
            Some(p) => PersonaProfile::for_persona(p),
            None => PersonaProfile::fallback(&self.config.default_model),
        };
        let model = options.model.unwrap_or(profile.model);
        let body = ChatRequest {
            model: &model,
            messages: vec![
                ChatMessage::system(options.system_prompt.unwrap_or(profile.system_prompt)),
                ChatMessage::user(message),
            ],
            temperature: options.temperature.unwrap_or(profile.temperature),
            max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        };

        let url = self.config.completions_url();
        tracing::debug!(
            persona = persona.map(|p| p.as_str()).unwrap_or("none"),
            model = %model,
            "POST {}",
            url
        );

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;
        let elapsed = started.elapsed();

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                model = %model,
                "Chat completion failed: {}",
                body_text
            );
            return Err(parse_http_error(status.as_u16(), &body_text));
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();
        let tokens = parsed.usage.and_then(|u| u.total_tokens).unwrap_or(0);
        let model = parsed.model.filter(|m| !m.is_empty()).unwrap_or(model);
        let cost = self.pricing.calculate_cost(&model, tokens);

        self.metrics.record_call(persona, tokens, cost);

        Ok(ChatResult {
            content,
            model,
            tokens,
            cost,
            processing_time_ms: elapsed.as_millis() as u64,
            persona,
        })
    }

    /// Like [`send`](Self::send), with the persona given by name.
    ///
    /// Unknown names fail with [`LlmError::UnknownPersona`] before any I/O.
    pub async fn send_named(
        &self,
        persona: &str,
        message: &str,
        options: SendOptions,
    ) -> LlmResult<ChatResult> {
        let persona: PersonaId = persona
            .parse()
            .map_err(|_| LlmError::UnknownPersona(persona.trim().to_string()))?;
        self.send(Some(persona), message, options).await
    }

    /// Verify the key and endpoint by listing models.
    pub async fn health_check(&self) -> LlmResult<()> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| missing_api_key_error(PROVIDER_NAME))?;

        let response = self
            .client
            .get(self.config.models_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status.as_u16(), &body))
        }
    }
}

#[async_trait]
impl ChatProvider for PromptRouter {
    async fn send(
        &self,
        persona: Option<PersonaId>,
        message: &str,
        options: SendOptions,
    ) -> LlmResult<ChatResult> {
        PromptRouter::send(self, persona, message, options).await
    }
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// Chat-completion response body; every field is optional on the wire
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<ResponseUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseUsage {
    #[serde(default)]
    total_tokens: Option<u64>,
}
