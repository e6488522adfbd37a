//! Bash script rendering for ordered task sets.

use crate::resolver::TaskLike;

/// Interpreter line written at the top of every script.
pub const BASH_SCRIPT_SHEBANG: &str = "#!/usr/bin/env bash";

/// Returned instead of a script while no task set has been accepted.
pub const NO_TASKS_SUBMITTED: &str = "Please first call /processTasks with a valid list of tasks.";

/// Render an already-ordered task sequence as a bash script.
///
/// Commands are written verbatim, one per line. An empty sequence yields
/// [`NO_TASKS_SUBMITTED`] rather than a bare shebang.
pub fn render<T: TaskLike>(ordered: &[T]) -> String {
    if ordered.is_empty() {
        return NO_TASKS_SUBMITTED.to_string();
    }

    let mut script = String::with_capacity(BASH_SCRIPT_SHEBANG.len() + 1 + ordered.len() * 16);
    script.push_str(BASH_SCRIPT_SHEBANG);
    script.push('\n');
    for task in ordered {
        script.push_str(task.command().unwrap_or_default());
        script.push('\n');
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Task;

    #[test]
    fn test_render_script() {
        let ordered = vec![
            Task::new("task-2", "touch /tmp/file1"),
            Task::new("task-1", "echo 'Hello World!' > /tmp/file1"),
        ];

        assert_eq!(
            render(&ordered),
            "#!/usr/bin/env bash\ntouch /tmp/file1\necho 'Hello World!' > /tmp/file1\n"
        );
    }

    #[test]
    fn test_render_empty_is_sentinel() {
        let ordered: Vec<Task> = Vec::new();
        assert_eq!(render(&ordered), NO_TASKS_SUBMITTED);
    }

    #[test]
    fn test_render_leaves_commands_untouched() {
        let ordered = vec![Task::new("q", "  printf '%s\\n' \"$HOME\"  ")];
        assert_eq!(
            render(&ordered),
            "#!/usr/bin/env bash\n  printf '%s\\n' \"$HOME\"  \n"
        );
    }
}
