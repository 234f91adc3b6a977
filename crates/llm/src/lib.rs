//! Tributa LLM
//!
//! Chat-completion client for the Tributa Agents workspace:
//! - `router` - `PromptRouter`, one persona-scoped call per `send`
//! - `profiles` - model, system prompt and temperature per persona
//! - `pricing` - per-model cost table
//! - `metrics` - injectable usage sink
//! - `provider` - the `ChatProvider` seam consumed by the task dispatcher

pub mod config;
pub mod http_client;
pub mod metrics;
pub mod pricing;
pub mod profiles;
pub mod provider;
pub mod router;
pub mod types;

pub use config::RouterConfig;
pub use http_client::build_http_client;
pub use metrics::{MetricsSink, MetricsSnapshot, UsageMetrics};
pub use pricing::CostCalculator;
pub use profiles::PersonaProfile;
pub use provider::ChatProvider;
pub use router::PromptRouter;
pub use types::*;
