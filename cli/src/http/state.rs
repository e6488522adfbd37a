//! HTTP服务器状态管理

use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use taskorder_core::api::{AppConfig, SubmissionSlot};
use tokio::sync::broadcast;

/// 应用状态（在所有handlers间共享）
#[derive(Clone)]
pub struct AppState {
    pub session_id: String,
    /// Last accepted task set; shared by every client of this process.
    pub submissions: Arc<SubmissionSlot>,
    pub config: Arc<AppConfig>,
    pub stats: Arc<RwLock<ServerStats>>,
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(session_id: String, config: AppConfig, shutdown_tx: broadcast::Sender<()>) -> Self {
        Self {
            session_id,
            submissions: Arc::new(SubmissionSlot::new()),
            config: Arc::new(config),
            stats: Arc::new(RwLock::new(ServerStats::new())),
            shutdown_tx,
        }
    }

    pub fn record_request(&self, endpoint: &str) {
        self.stats
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .increment_request(endpoint);
    }

    pub fn record_error(&self) {
        self.stats
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .increment_error();
    }
}

/// 服务器统计信息
pub struct ServerStats {
    pub requests_total: u64,
    pub requests_by_endpoint: HashMap<String, u64>,
    pub errors_total: u64,
    pub start_time: DateTime<Local>,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            requests_total: 0,
            requests_by_endpoint: HashMap::new(),
            errors_total: 0,
            start_time: Local::now(),
        }
    }

    pub fn increment_request(&mut self, endpoint: &str) {
        self.requests_total += 1;
        *self
            .requests_by_endpoint
            .entry(endpoint.to_string())
            .or_insert(0) += 1;
    }

    pub fn increment_error(&mut self) {
        self.errors_total += 1;
    }

    pub fn uptime_seconds(&self) -> f64 {
        let now = Local::now();
        (now - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}
