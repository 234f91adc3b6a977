//! Usage Metrics
//!
//! Running totals of calls, tokens, and cost. The router records into a
//! [`MetricsSink`] injected at construction, so callers can share one sink
//! across routers or isolate one per test.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tributa_core::PersonaId;

/// Receives one record per successful chat-completion call.
pub trait MetricsSink: Send + Sync {
    fn record_call(&self, persona: Option<PersonaId>, tokens: u64, cost: f64);
}

/// Point-in-time copy of the accumulated metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_calls: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
    /// Calls made with a persona; persona-less calls count only in the totals
    pub calls_by_persona: BTreeMap<PersonaId, u64>,
}

/// In-memory sink. Each update happens under one lock, so concurrent calls
/// never lose increments.
#[derive(Debug, Default)]
pub struct UsageMetrics {
    inner: Mutex<MetricsSnapshot>,
}

impl UsageMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.lock().clone()
    }

    pub fn reset(&self) {
        *self.lock() = MetricsSnapshot::default();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MetricsSnapshot> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MetricsSink for UsageMetrics {
    fn record_call(&self, persona: Option<PersonaId>, tokens: u64, cost: f64) {
        let mut metrics = self.lock();
        metrics.total_calls += 1;
        metrics.total_tokens += tokens;
        metrics.total_cost += cost;
        if let Some(persona) = persona {
            *metrics.calls_by_persona.entry(persona).or_insert(0) += 1;
        }
    }
}
