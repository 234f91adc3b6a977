//! Tributa Core
//!
//! Foundational types shared across the Tributa Agents workspace. This crate
//! has no dependency on HTTP, filesystem, or async code.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `persona` - The closed set of task-handling personas (`PersonaId`)
//! - `task` - Caller-supplied task records (`Task`)

pub mod error;
pub mod persona;
pub mod task;

pub use error::{CoreError, CoreResult};
pub use persona::PersonaId;
pub use task::Task;
