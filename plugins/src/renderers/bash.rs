use taskorder_core::api::{render, OutputRendererPlugin, Task};

pub struct BashRendererPlugin;

impl OutputRendererPlugin for BashRendererPlugin {
    fn name(&self) -> &str {
        "bash"
    }

    fn render(&self, ordered: &[Task]) -> anyhow::Result<String> {
        Ok(render(ordered))
    }
}
