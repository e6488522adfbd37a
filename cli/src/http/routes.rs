//! HTTP路由handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use taskorder_core::api::TaskSet;

use crate::http::{models::*, state::AppState, validation::validate_task_count};

/// 创建所有路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/processTasks", post(process_tasks_handler))
        .route("/generateBashScript", get(generate_bash_script_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/shutdown", post(shutdown_handler))
        .with_state(state)
}

/// POST /processTasks - 校验并排序任务，成功后保存为当前任务集
async fn process_tasks_handler(
    State(state): State<AppState>,
    body: Result<Json<TaskSet>, JsonRejection>,
) -> Result<Json<ProcessTasksResponse>, HttpServerError> {
    state.record_request("/processTasks");

    let tasks = match body {
        Ok(Json(set)) => set.into_tasks(),
        Err(rejection) => {
            state.record_error();
            tracing::warn!("malformed task set body: {}", rejection.body_text());
            return Err(rejection.into());
        }
    };
    if let Err(e) = validate_task_count(tasks.len(), state.config.http_server.max_tasks) {
        state.record_error();
        return Err(e);
    }

    match state.submissions.submit(&tasks) {
        Ok(ordered) => Ok(Json(ProcessTasksResponse {
            success: true,
            tasks: ordered.to_vec(),
        })),
        Err(e) => {
            state.record_error();
            tracing::warn!(code = e.code(), "task set rejected: {}", e);
            Err(e.into())
        }
    }
}

/// GET /generateBashScript - 渲染最近一次成功提交的任务集
async fn generate_bash_script_handler(State(state): State<AppState>) -> String {
    state.record_request("/generateBashScript");
    state.submissions.render_current()
}

/// GET /health - 健康检查
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let has_submission = state.submissions.current().is_some();
    let stats = state.stats.read().unwrap_or_else(|e| e.into_inner());

    Json(HealthResponse {
        status: "healthy".into(),
        session_id: state.session_id.clone(),
        uptime_seconds: stats.uptime_seconds(),
        requests_handled: stats.requests_total,
        has_submission,
        timestamp: Local::now().to_rfc3339(),
    })
}

/// POST /api/v1/shutdown - 触发优雅关闭
async fn shutdown_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    // 发送关闭信号
    let _ = state.shutdown_tx.send(());

    Json(serde_json::json!({
        "success": true,
        "message": "Shutdown signal sent"
    }))
}
