use std::collections::{HashMap, HashSet};

use crate::error::ResolveError;
use crate::resolver::task::TaskLike;

/// Implicit task dependency graph over one submitted task set.
///
/// Nodes are the submitted tasks in insertion order. Edges are never
/// materialized; they are looked up by name from each task's `requires` list
/// while the traversal runs, so malformed tasks surface exactly when they are
/// first reached.
#[derive(Debug)]
pub struct TaskGraph<'a, T: TaskLike> {
    /// Task nodes in submission order
    nodes: &'a [T],

    /// Name -> index of the first task carrying that name
    index: HashMap<&'a str, usize>,
}

/// One pending expansion on the explicit work stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next_dep: usize,
}

/// Per-call traversal state. Never outlives a single `resolve_order` call.
struct Traversal {
    emitted: Vec<bool>,
    on_stack: Vec<bool>,
    order: Vec<usize>,
    stack: Vec<Frame>,
}

impl<'a, T: TaskLike> TaskGraph<'a, T> {
    /// Construct the graph from a task list without validating it.
    pub fn from_tasks(tasks: &'a [T]) -> Self {
        let mut index = HashMap::with_capacity(tasks.len());
        for (pos, task) in tasks.iter().enumerate() {
            if let Some(name) = task.name() {
                index.entry(name).or_insert(pos);
            }
        }

        Self {
            nodes: tasks,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deterministic depth-first ordering.
    ///
    /// Returns node indices such that every task follows all of its transitive
    /// dependencies. Roots are visited in submission order and dependencies in
    /// `requires` order, so unrelated tasks keep a reproducible relative order.
    ///
    /// # Time Complexity
    ///
    /// O(V + E) where V = number of tasks, E = number of dependencies
    pub fn resolve_order(&self) -> Result<Vec<usize>, ResolveError> {
        if self.nodes.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        let mut seen_names: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        let mut walk = Traversal {
            emitted: vec![false; self.nodes.len()],
            on_stack: vec![false; self.nodes.len()],
            order: Vec::with_capacity(self.nodes.len()),
            stack: Vec::new(),
        };

        for (pos, task) in self.nodes.iter().enumerate() {
            // Duplicates are reported before any descent from this root.
            if let Some(name) = task.name() {
                if !seen_names.insert(name) {
                    return Err(ResolveError::DuplicateTaskName(name.to_string()));
                }
            }

            if !walk.emitted[pos] {
                self.expand(pos, &mut walk)?;
            }
        }

        Ok(walk.order)
    }

    /// Expand one root with an explicit stack. Behaves exactly like the
    /// recursive post-order expansion, including which error surfaces first.
    fn expand(&self, root: usize, walk: &mut Traversal) -> Result<(), ResolveError> {
        if self.enter(root, walk)? {
            walk.stack.push(Frame {
                node: root,
                next_dep: 0,
            });
        }

        while let Some(frame) = walk.stack.last_mut() {
            let task = &self.nodes[frame.node];
            let Some(entry) = task.requires().get(frame.next_dep) else {
                let node = frame.node;
                walk.stack.pop();
                walk.on_stack[node] = false;
                walk.emitted[node] = true;
                walk.order.push(node);
                continue;
            };
            frame.next_dep += 1;

            // Name was validated when this frame was entered.
            let owner = task.name().unwrap_or_default();
            let dep_name = entry
                .as_deref()
                .ok_or_else(|| ResolveError::MissingDependencyName(owner.to_string()))?;
            if dep_name == owner {
                return Err(ResolveError::SelfDependency(owner.to_string()));
            }
            let dep = *self
                .index
                .get(dep_name)
                .ok_or_else(|| ResolveError::DependencyNotFound {
                    task: owner.to_string(),
                    missing: dep_name.to_string(),
                })?;

            if self.enter(dep, walk)? {
                walk.stack.push(Frame {
                    node: dep,
                    next_dep: 0,
                });
            }
        }

        Ok(())
    }

    /// Validate a node on first reach and decide whether it needs expanding.
    ///
    /// Returns `Ok(false)` when the node was already emitted.
    fn enter(&self, node: usize, walk: &mut Traversal) -> Result<bool, ResolveError> {
        let task = &self.nodes[node];
        let name = task
            .name()
            .filter(|n| !n.trim().is_empty())
            .ok_or(ResolveError::InvalidTaskName)?;
        if task.command().map_or(true, |c| c.trim().is_empty()) {
            return Err(ResolveError::InvalidTaskCommand);
        }

        if walk.on_stack[node] {
            return Err(ResolveError::CyclicDependency(name.to_string()));
        }
        if walk.emitted[node] {
            return Ok(false);
        }

        walk.on_stack[node] = true;
        Ok(true)
    }
}

/// Validate and order a task set.
///
/// The input is never mutated; the result holds clones of the input values in
/// execution order.
pub fn resolve<T: TaskLike>(tasks: &[T]) -> Result<Vec<T>, ResolveError> {
    let graph = TaskGraph::from_tasks(tasks);
    match graph.resolve_order() {
        Ok(order) => {
            tracing::debug!(tasks = graph.len(), "task set resolved");
            Ok(order.into_iter().map(|pos| tasks[pos].clone()).collect())
        }
        Err(e) => {
            tracing::debug!(tasks = graph.len(), code = e.code(), "task set rejected: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::task::Task;
    use pretty_assertions::assert_eq;

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().filter_map(|t| t.name()).collect()
    }

    #[test]
    fn test_dependency_precedes_dependent() {
        let tasks = vec![
            Task::new("task-1", "echo 'Hello World!' > /tmp/file1").with_requires(["task-2"]),
            Task::new("task-2", "touch /tmp/file1"),
        ];

        let ordered = resolve(&tasks).unwrap();
        assert_eq!(names(&ordered), vec!["task-2", "task-1"]);
    }

    #[test]
    fn test_independent_tasks_keep_submission_order() {
        let tasks = vec![
            Task::new("c", "c"),
            Task::new("a", "a"),
            Task::new("b", "b"),
        ];

        let ordered = resolve(&tasks).unwrap();
        assert_eq!(names(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_requires_order_drives_traversal() {
        let tasks = vec![
            Task::new("app", "app").with_requires(["db", "cache"]),
            Task::new("cache", "cache"),
            Task::new("db", "db").with_requires(["net"]),
            Task::new("net", "net"),
        ];

        let ordered = resolve(&tasks).unwrap();
        assert_eq!(names(&ordered), vec!["net", "db", "cache", "app"]);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let tasks = vec![
            Task::new("top", "top").with_requires(["left", "right"]),
            Task::new("left", "left").with_requires(["base"]),
            Task::new("right", "right").with_requires(["base"]),
            Task::new("base", "base"),
        ];

        let ordered = resolve(&tasks).unwrap();
        assert_eq!(names(&ordered), vec!["base", "left", "right", "top"]);
    }

    #[test]
    fn test_empty_input() {
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(resolve(&tasks), Err(ResolveError::EmptyInput));
    }

    #[test]
    fn test_duplicate_name_reported_before_descent() {
        let tasks = vec![
            Task::new("task-1", "a"),
            Task::new("task-1", "b").with_requires(["missing"]),
        ];

        assert_eq!(
            resolve(&tasks),
            Err(ResolveError::DuplicateTaskName("task-1".into()))
        );
    }

    #[test]
    fn test_duplicate_after_earlier_failure_is_not_reached() {
        let tasks = vec![
            Task::new("a", "a").with_requires(["ghost"]),
            Task::new("a", "a"),
        ];

        assert_eq!(
            resolve(&tasks),
            Err(ResolveError::DependencyNotFound {
                task: "a".into(),
                missing: "ghost".into(),
            })
        );
    }

    #[test]
    fn test_blank_name_and_command() {
        let tasks = vec![Task::new("   ", "echo")];
        assert_eq!(resolve(&tasks), Err(ResolveError::InvalidTaskName));

        let tasks = vec![Task {
            name: None,
            command: Some("echo".into()),
            requires: None,
        }];
        assert_eq!(resolve(&tasks), Err(ResolveError::InvalidTaskName));

        let tasks = vec![Task::new("a", " \t")];
        assert_eq!(resolve(&tasks), Err(ResolveError::InvalidTaskCommand));
    }

    #[test]
    fn test_invalid_dependency_fails_when_first_reached() {
        // "b" has no command; it is reached as a dependency of "a" before the
        // blank-named root after it is visited.
        let tasks = vec![
            Task::new("a", "a").with_requires(["b"]),
            Task::new("  ", "c"),
            Task {
                name: Some("b".into()),
                command: None,
                requires: Some(vec![Some("zzz".into())]),
            },
        ];

        assert_eq!(resolve(&tasks), Err(ResolveError::InvalidTaskCommand));
    }

    #[test]
    fn test_null_requirement_entry() {
        let tasks = vec![Task {
            name: Some("a".into()),
            command: Some("a".into()),
            requires: Some(vec![None]),
        }];

        assert_eq!(
            resolve(&tasks),
            Err(ResolveError::MissingDependencyName("a".into()))
        );
    }

    #[test]
    fn test_self_dependency() {
        let tasks = vec![Task::new("task-1", "x").with_requires(["task-1"])];
        assert_eq!(
            resolve(&tasks),
            Err(ResolveError::SelfDependency("task-1".into()))
        );
    }

    #[test]
    fn test_cycle_names_back_edge_task() {
        let tasks = vec![
            Task::new("a", "a").with_requires(["b"]),
            Task::new("b", "b").with_requires(["c"]),
            Task::new("c", "c").with_requires(["a"]),
        ];

        assert_eq!(
            resolve(&tasks),
            Err(ResolveError::CyclicDependency("a".into()))
        );
    }

    #[test]
    fn test_cycle_entered_from_outside() {
        let tasks = vec![
            Task::new("root", "r").with_requires(["x"]),
            Task::new("x", "x").with_requires(["y"]),
            Task::new("y", "y").with_requires(["x"]),
        ];

        assert_eq!(
            resolve(&tasks),
            Err(ResolveError::CyclicDependency("x".into()))
        );
    }

    #[test]
    fn test_input_is_untouched() {
        let tasks = vec![
            Task::new("task-1", "one").with_requires(["task-2"]),
            Task::new("task-2", "two"),
        ];
        let before = tasks.clone();

        let _ = resolve(&tasks).unwrap();
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let n = 100_000;
        let mut tasks: Vec<Task> = (0..n)
            .map(|i| {
                Task::new(format!("t{i}"), format!("echo {i}")).with_requires([format!("t{}", i + 1)])
            })
            .collect();
        tasks[n - 1].requires = None;

        let order = TaskGraph::from_tasks(&tasks).resolve_order().unwrap();
        assert_eq!(order.len(), n);
        assert_eq!(order[0], n - 1);
        assert_eq!(order[n - 1], 0);
    }
}
