use crate::resolver::Task;

/// 输出渲染器插件（控制已排序任务的输出格式）
pub trait OutputRendererPlugin: Send + Sync {
    fn name(&self) -> &str;

    /// Render an already-ordered task sequence.
    fn render(&self, ordered: &[Task]) -> anyhow::Result<String>;
}
