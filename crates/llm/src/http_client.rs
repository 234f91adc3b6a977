//! HTTP Client Factory
//!
//! Builds the reqwest client shared by every call a router makes.

use std::time::Duration;

use crate::types::{LlmError, LlmResult};

/// Build a `reqwest::Client`.
///
/// - `Some(timeout)` -> every request is bounded by `timeout`
/// - `None` -> no client-side deadline
pub fn build_http_client(timeout: Option<Duration>) -> LlmResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| LlmError::config(format!("failed to build HTTP client: {}", e)))
}
