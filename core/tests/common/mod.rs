use taskorder_core::api::{Task, TaskLike, TaskSet};

pub fn tasks_from_json(input: &str) -> Vec<Task> {
    serde_json::from_str::<TaskSet>(input)
        .expect("fixture should be valid task json")
        .into_tasks()
}

pub fn position_of(ordered: &[Task], name: &str) -> Option<usize> {
    ordered.iter().position(|t| t.name() == Some(name))
}

/// Every named requirement sits strictly before its dependent.
pub fn assert_valid_ordering(ordered: &[Task]) {
    for (pos, task) in ordered.iter().enumerate() {
        for dep in task.requires().iter().flatten() {
            let dep_pos = position_of(ordered, dep)
                .unwrap_or_else(|| panic!("dependency {dep} missing from output"));
            assert!(
                dep_pos < pos,
                "{dep} (at {dep_pos}) must precede {:?} (at {pos})",
                task.name()
            );
        }
    }
}
