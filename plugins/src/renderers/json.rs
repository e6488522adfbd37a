use taskorder_core::api::{OutputRendererPlugin, Task};

/// Writes the ordered tasks as a JSON array of `{name, command}` objects.
pub struct JsonRendererPlugin {
    pretty_print: bool,
}

impl JsonRendererPlugin {
    pub fn new(pretty_print: bool) -> Self {
        Self { pretty_print }
    }
}

impl OutputRendererPlugin for JsonRendererPlugin {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, ordered: &[Task]) -> anyhow::Result<String> {
        let out = if self.pretty_print {
            serde_json::to_string_pretty(ordered)?
        } else {
            serde_json::to_string(ordered)?
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compact_output_drops_requires() {
        let ordered = vec![
            Task::new("task-2", "touch /tmp/file1"),
            Task::new("task-1", "cat /tmp/file1").with_requires(["task-2"]),
        ];
        let out = JsonRendererPlugin::new(false).render(&ordered).unwrap();
        assert_eq!(
            out,
            r#"[{"name":"task-2","command":"touch /tmp/file1"},{"name":"task-1","command":"cat /tmp/file1"}]"#
        );
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let ordered = vec![Task::new("only", "true")];
        let out = JsonRendererPlugin::new(true).render(&ordered).unwrap();
        assert!(out.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "only");
        assert!(value[0].get("requires").is_none());
    }
}
