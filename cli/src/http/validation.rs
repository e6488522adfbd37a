//! 基础请求验证逻辑

use super::models::HttpServerError;

/// 验证单次提交的任务数量上限
pub fn validate_task_count(count: usize, max_tasks: usize) -> Result<(), HttpServerError> {
    if count > max_tasks {
        return Err(HttpServerError::InvalidRequest(format!(
            "Too many tasks ({} tasks, max {})",
            count, max_tasks
        )));
    }

    Ok(())
}
