//! Persona Handlers
//!
//! One prompt template per persona. `build_prompt` matches exhaustively on
//! [`PersonaId`], so every persona always has a handler.
//!
//! Two handlers (frontend developer, code generator) embed the files the task
//! mentions; the rest work from the task text alone.

use std::path::Path;

use tributa_core::{PersonaId, Task};

use crate::services::context::{FileContext, PROJECT_DESCRIPTION};

/// Marker the coordinator is asked to put in front of its recommendation.
pub const RECOMMENDATION_MARKER: &str = "RECOMMENDED_PERSONA";

/// Build the user prompt for `persona`.
///
/// `files` is only read by the file-augmented handlers.
pub fn build_prompt(persona: PersonaId, task: &Task, files: &[FileContext]) -> String {
    match persona {
        PersonaId::Coordinator => coordinator_prompt(task),
        PersonaId::Architect => architect_prompt(task),
        PersonaId::FrontendDeveloper => frontend_developer_prompt(task, files),
        PersonaId::Security => security_prompt(task),
        PersonaId::Ux => ux_prompt(task),
        PersonaId::CodeGenerator => code_generator_prompt(task, files),
        PersonaId::Performance => performance_prompt(task),
        PersonaId::Qa => qa_prompt(task),
        PersonaId::Cleanup => cleanup_prompt(task),
        PersonaId::CustomerService => customer_service_prompt(task),
        PersonaId::Compliance => compliance_prompt(task),
    }
}

/// Parse the persona the coordinator recommends.
///
/// Reads the `RECOMMENDED_PERSONA:` line first. Without a usable one, falls
/// back to the first canonical persona key (`frontend-developer`, `qa`, ...)
/// mentioned anywhere in the text. Acting on the recommendation is left to
/// the caller.
pub fn recommended_persona(response: &str) -> Option<PersonaId> {
    marked_persona(response).or_else(|| first_mentioned_persona(response))
}

fn marked_persona(response: &str) -> Option<PersonaId> {
    response.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        let key = key.trim().trim_matches(|c: char| c == '*' || c == '#' || c == '-');
        if !key.trim().eq_ignore_ascii_case(RECOMMENDATION_MARKER) {
            return None;
        }
        let candidate = value
            .split_whitespace()
            .next()?
            .trim_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        candidate.parse().ok()
    })
}

// Exact lowercase keys only, so prose like "QA team" is not a match.
fn first_mentioned_persona(response: &str) -> Option<PersonaId> {
    response
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .filter(|token| !token.is_empty())
        .find_map(|token| {
            PersonaId::ALL
                .iter()
                .copied()
                .filter(|p| *p != PersonaId::Coordinator)
                .find(|p| p.as_str() == token)
        })
}

fn task_section(task: &Task) -> String {
    format!(
        "## Task\n**Title:** {}\n**Type:** {}\n**Priority:** {}\n\n**Description:**\n{}",
        task.title, task.task_type, task.priority, task.description
    )
}

fn project_section() -> String {
    format!("## Project Context\n{}", PROJECT_DESCRIPTION)
}

fn files_section(files: &[FileContext]) -> String {
    if files.is_empty() {
        return "## Referenced Files\nNo referenced files could be read. Work from the task \
                description and state any assumptions about existing code."
            .to_string();
    }

    let blocks: Vec<String> = files
        .iter()
        .map(|file| {
            let note = if file.truncated {
                format!(" (truncated to {} characters)", file.content.chars().count())
            } else {
                String::new()
            };
            format!(
                "### File: {}{}\n```{}\n{}\n```",
                file.path,
                note,
                fence_language(&file.path),
                file.content
            )
        })
        .collect();

    format!("## Referenced Files\n{}", blocks.join("\n\n"))
}

fn fence_language(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("ts") => "typescript",
        Some("tsx") => "tsx",
        Some("js") | Some("mjs") | Some("cjs") => "javascript",
        Some("jsx") => "jsx",
        Some("json") => "json",
        Some("css") => "css",
        Some("scss") => "scss",
        Some("html") => "html",
        Some("md") => "markdown",
        Some("rs") => "rust",
        Some("toml") => "toml",
        Some("yaml") | Some("yml") => "yaml",
        _ => "",
    }
}

fn assemble(parts: Vec<String>) -> String {
    parts.join("\n\n")
}

fn coordinator_prompt(task: &Task) -> String {
    let roster: Vec<String> = PersonaId::ALL
        .iter()
        .filter(|p| **p != PersonaId::Coordinator)
        .map(|p| format!("- `{}`: {} ({})", p.as_str(), p.display_name(), p.category()))
        .collect();

    assemble(vec![
        project_section(),
        task_section(task),
        format!("## Available Specialists\n{}", roster.join("\n")),
        format!(
            "## Instructions\n\
             1. Summarize what the task actually requires.\n\
             2. Pick the single specialist best suited to do it and explain why.\n\
             3. List any other specialists that should review the result afterwards.\n\
             4. Do not solve the task yourself.\n\n\
             End your answer with one line of the form `{}: <specialist-id>`.",
            RECOMMENDATION_MARKER
        ),
    ])
}

fn architect_prompt(task: &Task) -> String {
    assemble(vec![
        project_section(),
        task_section(task),
        "## Instructions\n\
         Produce an architecture proposal for this task:\n\
         - Components and modules involved, with their responsibilities\n\
         - Data flow and integration points with external services\n\
         - State management and error-handling approach\n\
         - Risks, trade-offs, and an incremental implementation plan"
            .to_string(),
    ])
}

fn frontend_developer_prompt(task: &Task, files: &[FileContext]) -> String {
    assemble(vec![
        task_section(task),
        files_section(files),
        "## Instructions\n\
         Implement the change in React + TypeScript:\n\
         - Follow the conventions of the files above (component style, hooks, Tailwind classes)\n\
         - Return the complete updated content of every file you change, each in its own \
         code block headed by its path\n\
         - Keep components accessible and type-safe; avoid `any`\n\
         - Briefly list what changed and why"
            .to_string(),
    ])
}

fn security_prompt(task: &Task) -> String {
    assemble(vec![
        task_section(task),
        "## Instructions\n\
         Perform a security review for this task:\n\
         - Threats and attack surface (authentication, authorization, injection, XSS, CSRF)\n\
         - Handling of secrets, personal data, and financial data (LGPD)\n\
         - Concrete findings ranked by severity, each with a remediation\n\
         - Checks to add to CI or code review"
            .to_string(),
    ])
}

fn ux_prompt(task: &Task) -> String {
    assemble(vec![
        task_section(task),
        "## Instructions\n\
         Propose a user experience for this task:\n\
         - User goals and the main flow, step by step\n\
         - Layout, copy, and feedback states (loading, empty, error, success)\n\
         - Accessibility (WCAG 2.1 AA) and mobile considerations\n\
         - Friction points and how the design removes them"
            .to_string(),
    ])
}

fn code_generator_prompt(task: &Task, files: &[FileContext]) -> String {
    assemble(vec![
        task_section(task),
        files_section(files),
        "## Instructions\n\
         Generate the code this task needs:\n\
         - Complete, compilable TypeScript that fits the existing files above\n\
         - One code block per file, headed by its path\n\
         - Include types and interfaces for all new data structures\n\
         - Add brief usage notes only where the integration is not obvious"
            .to_string(),
    ])
}

fn performance_prompt(task: &Task) -> String {
    assemble(vec![
        task_section(task),
        "## Instructions\n\
         Analyze the performance aspects of this task:\n\
         - Likely bottlenecks (rendering, bundle size, network, memory)\n\
         - How to measure each one before and after a change\n\
         - Specific optimizations, ordered by expected impact\n\
         - Regressions to watch for"
            .to_string(),
    ])
}

fn qa_prompt(task: &Task) -> String {
    assemble(vec![
        task_section(task),
        "## Instructions\n\
         Write a test plan for this task:\n\
         - Acceptance criteria, each precise enough to automate\n\
         - Unit and integration test cases, including edge cases and failure modes\n\
         - End-to-end scenarios for the user-facing flow\n\
         - Test data and mocks required"
            .to_string(),
    ])
}

fn cleanup_prompt(task: &Task) -> String {
    assemble(vec![
        task_section(task),
        "## Instructions\n\
         Plan a cleanup for this task:\n\
         - Dead code, unused dependencies, and duplicated logic to remove\n\
         - Inconsistent patterns to unify, with the target pattern\n\
         - A sequence of small, behavior-preserving steps\n\
         - How to verify nothing changed for users"
            .to_string(),
    ])
}

fn customer_service_prompt(task: &Task) -> String {
    assemble(vec![
        task_section(task),
        "## Instructions\n\
         Draft the reply to this customer request:\n\
         - Answer in the customer's language (Portuguese or English)\n\
         - Be clear and friendly; avoid jargon, and explain tax terms when needed\n\
         - Do not promise outcomes on credit recovery or token value\n\
         - If the request needs a human specialist, say so and describe the next step"
            .to_string(),
    ])
}

fn compliance_prompt(task: &Task) -> String {
    assemble(vec![
        project_section(),
        task_section(task),
        "## Instructions\n\
         Assess the regulatory implications of this task:\n\
         - Applicable rules (tax law, CVM, KYC/AML, LGPD) and why they apply\n\
         - Compliance risks ranked by severity\n\
         - Required controls, records, and disclosures\n\
         - Open questions for legal review"
            .to_string(),
    ])
}
