//! Dependency resolution for submitted task sets
//!
//! # Architecture
//!
//! ```text
//! Vec<Task>
//!   ↓
//! TaskGraph::from_tasks()      name index, no validation yet
//!   ↓
//! TaskGraph::resolve_order()   duplicate scan + lazy validation + DFS
//!   ↓
//! Vec<usize> → Vec<Task>       execution order
//! ```

mod graph;
pub mod task;

pub use graph::{resolve, TaskGraph};
pub use task::{Task, TaskLike, TaskSet};
