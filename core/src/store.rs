//! Process-wide holder for the most recently accepted task set.
//!
//! Lifecycle: empty at startup, replaced on every successful submission
//! (last write wins), read on render, never expires. It is shared by every
//! caller of the process; per-caller isolation is not provided.

use std::sync::{Arc, RwLock};

use crate::error::ResolveError;
use crate::render::render;
use crate::resolver::{resolve, Task};

#[derive(Debug, Default)]
pub struct SubmissionSlot {
    accepted: RwLock<Option<Arc<Vec<Task>>>>,
}

impl SubmissionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `tasks` and, on success only, make the ordered set current.
    ///
    /// A rejected submission leaves the previously accepted set in place.
    pub fn submit(&self, tasks: &[Task]) -> Result<Arc<Vec<Task>>, ResolveError> {
        let ordered = Arc::new(resolve(tasks)?);
        let mut slot = self.accepted.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::clone(&ordered));
        tracing::info!(tasks = ordered.len(), "task set accepted");
        Ok(ordered)
    }

    /// The ordered set from the last successful submission, if any.
    pub fn current(&self) -> Option<Arc<Vec<Task>>> {
        self.accepted
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Bash script for the current set, or the "nothing submitted" sentinel.
    pub fn render_current(&self) -> String {
        match self.current() {
            Some(ordered) => render(ordered.as_slice()),
            None => render::<Task>(&[]),
        }
    }
}
