use serde::{Deserialize, Serialize};

/// A named unit of work as submitted by a caller.
///
/// Every field is optional on the wire so that missing or `null` values reach
/// the resolver and are reported as validation errors instead of decode errors.
/// Only `name` and `command` are written back out; `requires` is input-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub command: Option<String>,

    #[serde(default, skip_serializing)]
    pub requires: Option<Vec<Option<String>>>,
}

impl Task {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            command: Some(command.into()),
            requires: None,
        }
    }

    /// Builder-style helper that appends dependency names in order.
    pub fn with_requires<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.requires.get_or_insert_with(Vec::new);
        list.extend(deps.into_iter().map(|d| Some(d.into())));
        self
    }
}

/// Common task interface for dependency resolution.
///
/// `requires` entries are `None` when the caller sent an explicit `null`.
pub trait TaskLike: Clone {
    fn name(&self) -> Option<&str>;
    fn command(&self) -> Option<&str>;
    fn requires(&self) -> &[Option<String>];
}

impl TaskLike for Task {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    fn requires(&self) -> &[Option<String>] {
        self.requires.as_deref().unwrap_or(&[])
    }
}

/// Request envelope: `{"tasks": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskSet {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

impl TaskSet {
    /// Tasks in submission order; an absent or `null` list is empty.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks.unwrap_or_default()
    }
}
