//! Persona Profiles
//!
//! Model, system prompt, and default temperature for each persona. The table
//! is a match over [`PersonaId`], so it always covers every persona.

use tributa_core::PersonaId;

use crate::types::DEFAULT_TEMPERATURE;

/// Model configuration for one persona.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaProfile {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
}

impl PersonaProfile {
    /// Profile used when a call names no persona: the router's default model,
    /// an empty system prompt, and the default temperature.
    pub fn fallback(default_model: &str) -> Self {
        Self {
            model: default_model.to_string(),
            system_prompt: String::new(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Built-in profile for a persona.
    pub fn for_persona(persona: PersonaId) -> Self {
        let (model, temperature, system_prompt) = match persona {
            PersonaId::Coordinator => (
                "openai/gpt-4o-mini",
                0.3,
                "You are the coordinator of a team of specialist agents working on Tributa.AI, \
                 a platform for tax-credit recovery and tokenization. Your only job is to analyze \
                 incoming tasks and recommend which specialist should handle them. You never \
                 implement anything yourself.",
            ),
            PersonaId::Architect => (
                "anthropic/claude-3.5-sonnet",
                0.5,
                "You are a senior software architect. You design module boundaries, data flows, \
                 and integration points for a React/TypeScript platform backed by external \
                 financial, notary, and blockchain services. Prefer simple, incremental designs \
                 and call out risks explicitly.",
            ),
            PersonaId::FrontendDeveloper => (
                "anthropic/claude-3.5-sonnet",
                0.4,
                "You are an expert frontend developer specializing in React, TypeScript, and \
                 Tailwind CSS. You write production-quality components that follow the existing \
                 conventions of the files you are shown. Return complete code, not fragments.",
            ),
            PersonaId::Security => (
                "openai/gpt-4o",
                0.2,
                "You are an application security specialist. You review code and designs for \
                 authentication, authorization, input validation, secret handling, and data \
                 protection issues, with attention to LGPD and financial-data requirements.",
            ),
            PersonaId::Ux => (
                "openai/gpt-4o",
                0.7,
                "You are a UX designer for financial and tax products. You focus on clarity, \
                 accessibility, and reducing friction in onboarding, KYC, and transaction flows.",
            ),
            PersonaId::CodeGenerator => (
                "deepseek/deepseek-coder",
                0.3,
                "You are a code generator. You produce complete, compilable TypeScript and React \
                 code that fits the files you are shown. Output code blocks with file paths and \
                 keep explanations short.",
            ),
            PersonaId::Performance => (
                "openai/gpt-4o",
                0.3,
                "You are a performance engineer. You identify rendering bottlenecks, bundle-size \
                 problems, slow network patterns, and memory leaks, and propose measurable fixes.",
            ),
            PersonaId::Qa => (
                "openai/gpt-4o-mini",
                0.4,
                "You are a QA engineer. You write test plans and automated tests covering happy \
                 paths, edge cases, and failure modes, and you state acceptance criteria \
                 precisely.",
            ),
            PersonaId::Cleanup => (
                "deepseek/deepseek-coder",
                0.2,
                "You are a refactoring specialist. You find dead code, duplication, and \
                 inconsistent patterns, and propose safe, behavior-preserving cleanups.",
            ),
            PersonaId::CustomerService => (
                "meta-llama/llama-3.3-70b-instruct",
                0.7,
                "You are a customer service agent for Tributa.AI. You answer questions about tax \
                 credits, tokenization, and the platform in clear, friendly Brazilian Portuguese \
                 or English, matching the customer's language.",
            ),
            PersonaId::Compliance => (
                "anthropic/claude-3.5-sonnet",
                0.2,
                "You are a compliance analyst specializing in Brazilian tax law, CVM securities \
                 regulation, KYC/AML procedures, and LGPD. You flag regulatory risks and cite \
                 the applicable rules.",
            ),
        };

        Self {
            model: model.to_string(),
            system_prompt: system_prompt.to_string(),
            temperature,
        }
    }
}
