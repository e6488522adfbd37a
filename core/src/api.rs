//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `taskorder_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_default, load_from_path, AppConfig, HttpServerConfig, LoggingConfig,
};
pub use crate::error::{CliError, ResolveError};
pub use crate::render::{render, BASH_SCRIPT_SHEBANG, NO_TASKS_SUBMITTED};
pub use crate::resolver::{resolve, Task, TaskGraph, TaskLike, TaskSet};
pub use crate::store::SubmissionSlot;
pub use crate::traits::OutputRendererPlugin;
