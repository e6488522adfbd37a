use thiserror::Error;

/// Validation and ordering failures raised while resolving a task set.
///
/// Messages are stable and parameterized so callers can surface them verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Task list cannot be null or empty.")]
    EmptyInput,

    #[error("Duplicate task name found: {0}")]
    DuplicateTaskName(String),

    #[error("Task name cannot be null or empty.")]
    InvalidTaskName,

    #[error("Task command cannot be null or empty.")]
    InvalidTaskCommand,

    #[error("Task {0} has a dependency with null name")]
    MissingDependencyName(String),

    #[error("Task {0} cannot depend on itself")]
    SelfDependency(String),

    #[error("Dependency for {task} not found {missing}")]
    DependencyNotFound { task: String, missing: String },

    #[error("Cyclic requirements in tasks detected: {0}")]
    CyclicDependency(String),
}

impl ResolveError {
    /// Machine-readable code for each error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::DuplicateTaskName(_) => "DUPLICATE_TASK_NAME",
            Self::InvalidTaskName => "INVALID_TASK_NAME",
            Self::InvalidTaskCommand => "INVALID_TASK_COMMAND",
            Self::MissingDependencyName(_) => "MISSING_DEPENDENCY_NAME",
            Self::SelfDependency(_) => "SELF_DEPENDENCY",
            Self::DependencyNotFound { .. } => "DEPENDENCY_NOT_FOUND",
            Self::CyclicDependency(_) => "CYCLIC_DEPENDENCY",
        }
    }
}
