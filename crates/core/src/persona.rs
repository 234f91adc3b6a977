//! Persona Identifiers
//!
//! The fixed set of task-handling personas. Every table keyed by persona
//! (model profiles, prompt handlers, result categories) matches on this enum,
//! so adding a persona is a compile error until every table handles it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the eleven task-handling personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaId {
    /// Routes a task to the persona best suited for it (advisory only)
    Coordinator,
    /// System and module architecture
    Architect,
    /// React/TypeScript UI implementation (reads referenced files)
    FrontendDeveloper,
    /// Security review and hardening
    Security,
    /// User experience and interface design
    Ux,
    /// Code generation from task descriptions (reads referenced files)
    CodeGenerator,
    /// Performance analysis and optimization
    Performance,
    /// Test planning and quality assurance
    Qa,
    /// Dead code removal and refactoring
    Cleanup,
    /// Customer-facing support responses
    CustomerService,
    /// Regulatory and tax compliance review
    Compliance,
}

impl PersonaId {
    /// All personas, in declaration order.
    pub const ALL: [PersonaId; 11] = [
        PersonaId::Coordinator,
        PersonaId::Architect,
        PersonaId::FrontendDeveloper,
        PersonaId::Security,
        PersonaId::Ux,
        PersonaId::CodeGenerator,
        PersonaId::Performance,
        PersonaId::Qa,
        PersonaId::Cleanup,
        PersonaId::CustomerService,
        PersonaId::Compliance,
    ];

    /// Canonical identifier (used as map key, in logs and in results).
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Coordinator => "coordinator",
            PersonaId::Architect => "architect",
            PersonaId::FrontendDeveloper => "frontend-developer",
            PersonaId::Security => "security",
            PersonaId::Ux => "ux",
            PersonaId::CodeGenerator => "code-generator",
            PersonaId::Performance => "performance",
            PersonaId::Qa => "qa",
            PersonaId::Cleanup => "cleanup",
            PersonaId::CustomerService => "customer-service",
            PersonaId::Compliance => "compliance",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaId::Coordinator => "Coordinator",
            PersonaId::Architect => "Software Architect",
            PersonaId::FrontendDeveloper => "Frontend Developer",
            PersonaId::Security => "Security Specialist",
            PersonaId::Ux => "UX Designer",
            PersonaId::CodeGenerator => "Code Generator",
            PersonaId::Performance => "Performance Engineer",
            PersonaId::Qa => "QA Engineer",
            PersonaId::Cleanup => "Cleanup Specialist",
            PersonaId::CustomerService => "Customer Service Agent",
            PersonaId::Compliance => "Compliance Analyst",
        }
    }

    /// Semantic category attached to results produced by this persona.
    pub fn category(&self) -> &'static str {
        match self {
            PersonaId::Coordinator => "routing",
            PersonaId::Architect => "architecture",
            PersonaId::FrontendDeveloper => "code",
            PersonaId::Security => "security",
            PersonaId::Ux => "design",
            PersonaId::CodeGenerator => "code",
            PersonaId::Performance => "performance",
            PersonaId::Qa => "testing",
            PersonaId::Cleanup => "refactoring",
            PersonaId::CustomerService => "support",
            PersonaId::Compliance => "compliance",
        }
    }

    /// Whether this persona's handler embeds files referenced by the task.
    pub fn reads_files(&self) -> bool {
        matches!(self, PersonaId::FrontendDeveloper | PersonaId::CodeGenerator)
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaId {
    type Err = CoreError;

    /// Case-insensitive; `_` is accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        PersonaId::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| CoreError::unknown_persona(s.trim()))
    }
}
