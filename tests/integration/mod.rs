//! Integration Tests Module
//!
//! End-to-end tests for Tributa Agents against a mock chat-completion server.
//! Tests cover the prompt router, persona dispatch, file context loading, and
//! configuration persistence.

// Shared mock-server fixtures
mod common;

// Prompt router: cost, metrics, and error handling
mod router_test;
