//! Services
//!
//! Business logic for task dispatch:
//! - `context` - file references and project description embedded in prompts
//! - `dispatcher` - persona handlers and the `TaskDispatcher`

pub mod context;
pub mod dispatcher;

pub use context::{FileContext, FileContextLoader};
pub use dispatcher::{recommended_persona, TaskDispatcher};
