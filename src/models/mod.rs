//! Data Models
//!
//! Results returned by the dispatcher and its configuration.

pub mod handler_result;
pub mod settings;

pub use handler_result::HandlerResult;
pub use settings::AgentConfig;
