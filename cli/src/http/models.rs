//! HTTP API数据模型

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use taskorder_core::api::{ResolveError, Task};

// ============= Process Tasks =============

#[derive(Debug, Serialize)]
pub struct ProcessTasksResponse {
    pub success: bool,
    /// Ordered tasks; each serialized as `{name, command}`.
    pub tasks: Vec<Task>,
}

// ============= Health =============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub has_submission: bool,
    pub timestamp: String,
}

// ============= Error Handling =============

#[derive(Debug)]
pub enum HttpServerError {
    InvalidRequest(String),
    Resolution(ResolveError),
}

impl From<ResolveError> for HttpServerError {
    fn from(err: ResolveError) -> Self {
        Self::Resolution(err)
    }
}

/// Undecodable bodies, wrong content type and oversized payloads are all
/// reported as `INVALID_REQUEST` with 400.
impl From<JsonRejection> for HttpServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            Self::Resolution(err) => (StatusCode::BAD_REQUEST, err.code(), err.to_string()),
        };

        let body = serde_json::json!({
            "success": false,
            "error": message,
            "error_code": error_code,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_tasks_response_serialize() {
        let resp = ProcessTasksResponse {
            success: true,
            tasks: vec![
                Task::new("task-2", "pwd"),
                Task::new("task-1", "ls").with_requires(["task-2"]),
            ],
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"tasks":[{"name":"task-2","command":"pwd"},{"name":"task-1","command":"ls"}]}"#
        );
    }

    #[test]
    fn test_resolution_error_response_status() {
        let resp = HttpServerError::from(ResolveError::EmptyInput).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = HttpServerError::InvalidRequest("too many tasks".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
