//! Prompt Router Integration Tests
//!
//! Tests for `PromptRouter::send` against a mock OpenRouter endpoint.

use std::sync::Arc;

use serde_json::json;
use tributa_agents::{
    LlmError, MetricsSink, PersonaId, PromptRouter, RouterConfig, SendOptions, UsageMetrics,
};
use tributa_llm::UpstreamKind;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{approx_eq, completion, mount_completion, request_bodies, router, router_config};

// ============================================================================
// Cost Tests
// ============================================================================

#[tokio::test]
async fn test_cost_uses_model_price() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("openai/gpt-4o", "done", 2_000), 1).await;

    let router = router(&server, Arc::new(UsageMetrics::new()));
    let result = router
        .send(Some(PersonaId::Security), "check headers", SendOptions::default())
        .await
        .unwrap();

    assert_eq!(result.tokens, 2_000);
    assert!(approx_eq(result.cost, 2_000.0 * 7.5 / 1_000_000.0));
}

#[tokio::test]
async fn test_cost_falls_back_for_unknown_model() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("acme/brand-new-model", "hi", 1_000), 1).await;

    let router = router(&server, Arc::new(UsageMetrics::new()));
    let result = router
        .send(None, "hello", SendOptions::default())
        .await
        .unwrap();

    assert_eq!(result.model, "acme/brand-new-model");
    assert!(approx_eq(result.cost, 1_000.0 * 2.0 / 1_000_000.0));
}

#[tokio::test]
async fn test_missing_usage_costs_nothing() {
    let server = MockServer::start().await;
    mount_completion(
        &server,
        json!({"choices": [{"message": {"content": "no usage block"}}]}),
        1,
    )
    .await;

    let metrics = Arc::new(UsageMetrics::new());
    let router = router(&server, metrics.clone());
    let result = router
        .send(Some(PersonaId::Qa), "write tests", SendOptions::default())
        .await
        .unwrap();

    assert_eq!(result.content, "no usage block");
    assert_eq!(result.tokens, 0);
    assert_eq!(result.cost, 0.0);
    // Model falls back to the one requested
    assert_eq!(result.model, "openai/gpt-4o-mini");
    assert_eq!(metrics.snapshot().total_calls, 1);
}

// ============================================================================
// Metrics Tests
// ============================================================================

#[tokio::test]
async fn test_metrics_sum_successful_calls() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("openai/gpt-4o-mini", "ok", 500), 3).await;

    let metrics = Arc::new(UsageMetrics::new());
    let router = router(&server, metrics.clone());

    let mut expected_cost = 0.0;
    for persona in [PersonaId::Coordinator, PersonaId::Qa, PersonaId::Qa] {
        let result = router
            .send(Some(persona), "task", SendOptions::default())
            .await
            .unwrap();
        expected_cost += result.cost;
    }

    let snap = metrics.snapshot();
    assert_eq!(snap.total_calls, 3);
    assert_eq!(snap.total_tokens, 1_500);
    assert!(approx_eq(snap.total_cost, expected_cost));
    assert_eq!(snap.calls_by_persona.get(&PersonaId::Qa), Some(&2));
    assert_eq!(snap.calls_by_persona.get(&PersonaId::Coordinator), Some(&1));
}

#[tokio::test]
async fn test_failed_call_is_not_counted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_completion(&server, completion("openai/gpt-4o", "ok", 100), 1).await;

    let metrics = Arc::new(UsageMetrics::new());
    let router = router(&server, metrics.clone());

    let err = router
        .send(Some(PersonaId::Architect), "first", SendOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::Upstream { status: 500, .. }));
    assert_eq!(metrics.snapshot().total_calls, 0);

    router
        .send(Some(PersonaId::Architect), "second", SendOptions::default())
        .await
        .unwrap();

    let snap = metrics.snapshot();
    assert_eq!(snap.total_calls, 1);
    assert_eq!(snap.total_tokens, 100);
}

#[tokio::test]
async fn test_concurrent_sends_are_all_counted() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("openai/gpt-4o-mini", "ok", 10), 8).await;

    let metrics = Arc::new(UsageMetrics::new());
    let router = Arc::new(router(&server, metrics.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                router
                    .send(Some(PersonaId::Cleanup), "tidy", SendOptions::default())
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let snap = metrics.snapshot();
    assert_eq!(snap.total_calls, 8);
    assert_eq!(snap.total_tokens, 80);
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("openai/gpt-4o", "ok", 1), 0).await;

    let config = RouterConfig::default().with_base_url(server.uri());
    let metrics = Arc::new(UsageMetrics::new());
    let router = PromptRouter::new(config, metrics.clone()).unwrap();

    let err = router
        .send(Some(PersonaId::Ux), "design", SendOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::MissingApiKey { .. }));
    assert_eq!(metrics.snapshot().total_calls, 0);
}

#[tokio::test]
async fn test_blank_api_key_counts_as_missing() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("openai/gpt-4o", "ok", 1), 0).await;

    let config = RouterConfig::default()
        .with_api_key("   ")
        .with_base_url(server.uri());
    let router = PromptRouter::new(config, Arc::new(UsageMetrics::new())).unwrap();

    let err = router
        .send(None, "hello", SendOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[tokio::test]
async fn test_upstream_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"error":{"message":"slow down"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let router = router(&server, Arc::new(UsageMetrics::new()));
    let err = router
        .send(Some(PersonaId::Performance), "profile", SendOptions::default())
        .await
        .unwrap_err();

    match &err {
        LlmError::Upstream { status, body } => {
            assert_eq!(*status, 429);
            assert!(body.contains("slow down"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
    assert_eq!(err.upstream_kind(), Some(UpstreamKind::RateLimited));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn test_send_named_unknown_persona_makes_no_request() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("openai/gpt-4o", "ok", 1), 0).await;

    let router = router(&server, Arc::new(UsageMetrics::new()));
    let err = router
        .send_named("astrologer", "read my stars", SendOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::UnknownPersona(ref name) if name == "astrologer"));
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_persona_profile_in_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-or-test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("deepseek/deepseek-coder", "fn main() {}", 42)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let router = router(&server, Arc::new(UsageMetrics::new()));
    let result = router
        .send_named("code-generator", "generate a hook", SendOptions::default())
        .await
        .unwrap();
    assert_eq!(result.persona, Some(PersonaId::CodeGenerator));

    let bodies = request_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["model"], "deepseek/deepseek-coder");
    assert_eq!(bodies[0]["messages"][0]["role"], "system");
    assert!(!bodies[0]["messages"][0]["content"]
        .as_str()
        .unwrap()
        .is_empty());
    assert_eq!(bodies[0]["messages"][1]["content"], "generate a hook");
}

#[tokio::test]
async fn test_health_check_reports_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .expect(1)
        .mount(&server)
        .await;

    let router = PromptRouter::new(router_config(&server), Arc::new(UsageMetrics::new())).unwrap();
    let err = router.health_check().await.unwrap_err();
    assert_eq!(err.upstream_kind(), Some(UpstreamKind::Authentication));
}

#[tokio::test]
async fn test_router_exposes_injected_sink() {
    let server = MockServer::start().await;
    mount_completion(&server, completion("openai/gpt-4o-mini", "ok", 7), 1).await;

    let metrics = Arc::new(UsageMetrics::new());
    let router = router(&server, metrics.clone());
    router
        .send(Some(PersonaId::Compliance), "check LGPD", SendOptions::default())
        .await
        .unwrap();

    // Records through the handle land in the same sink
    router.metrics().record_call(None, 3, 0.0);
    let snap = metrics.snapshot();
    assert_eq!(snap.total_calls, 2);
    assert_eq!(snap.total_tokens, 10);
}
