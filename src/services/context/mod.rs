//! Prompt Context
//!
//! Material handlers embed in prompts besides the task itself: files the task
//! mentions and the static project description.

pub mod file_context;
pub mod project;

pub use file_context::{
    extract_file_references, truncate_chars, FileContext, FileContextLoader,
    DEFAULT_MAX_FILE_CHARS,
};
pub use project::PROJECT_DESCRIPTION;
