//! Shared fixtures for the integration tests.

use std::sync::Arc;

use serde_json::{json, Value};
use tributa_agents::{PromptRouter, RouterConfig, UsageMetrics};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "sk-or-test";

pub fn router_config(server: &MockServer) -> RouterConfig {
    RouterConfig::default()
        .with_api_key(API_KEY)
        .with_base_url(server.uri())
}

pub fn router(server: &MockServer, metrics: Arc<UsageMetrics>) -> PromptRouter {
    PromptRouter::new(router_config(server), metrics).unwrap()
}

/// A chat-completion body with one choice.
pub fn completion(model: &str, content: &str, total_tokens: u64) -> Value {
    json!({
        "id": "gen-test",
        "model": model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": total_tokens / 2,
            "completion_tokens": total_tokens - total_tokens / 2,
            "total_tokens": total_tokens
        }
    })
}

/// Mount a completions mock answering every call with `body`, expecting `calls` hits.
pub async fn mount_completion(server: &MockServer, body: Value, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}

/// JSON bodies of every request the server has seen.
pub async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.body_json::<Value>().unwrap())
        .collect()
}

/// Content of the user message in a completion request.
pub fn user_message(body: &Value) -> String {
    body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["role"] == "user")
        .and_then(|m| m["content"].as_str())
        .unwrap()
        .to_string()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}
