//! HTTP服务器生命周期管理

use super::{
    middleware::{create_middleware_stack, request_logger},
    routes::create_router,
    AppState,
};
use crate::commands::cli::HttpServerArgs;
use axum::middleware;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use taskorder_core::api::{AppConfig, CliError};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{info, warn};
use uuid::Uuid;

/// HTTP服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// CLI 参数优先，配置文件作为默认值
    pub fn resolve(args: &HttpServerArgs, cfg: &AppConfig) -> Self {
        Self {
            host: args
                .host
                .clone()
                .unwrap_or_else(|| cfg.http_server.host.clone()),
            port: args.port.unwrap_or(cfg.http_server.port),
            request_timeout: Duration::from_secs(cfg.http_server.request_timeout_secs),
        }
    }
}

/// 获取服务器状态文件目录
fn get_servers_dir() -> Result<PathBuf, CliError> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Command("Cannot find home directory".to_string()))?;
    let servers_dir = home.join(".taskorder").join("servers");
    fs::create_dir_all(&servers_dir)
        .map_err(|e| CliError::Command(format!("Failed to create servers directory: {e}")))?;
    Ok(servers_dir)
}

/// 写入服务器状态文件
fn write_state_file(session_id: &str, config: &ServerConfig) -> Result<PathBuf, CliError> {
    let state_file = get_servers_dir()?.join("taskorder.state");

    let state = serde_json::json!({
        "session_id": session_id,
        "port": config.port,
        "pid": std::process::id(),
        "url": format!("http://{}:{}", config.host, config.port),
        "started_at": chrono::Local::now().to_rfc3339()
    });
    let body = serde_json::to_string_pretty(&state)?;

    fs::write(&state_file, body)
        .map_err(|e| CliError::Command(format!("Failed to write state file: {e}")))?;

    info!("State file written to: {}", state_file.display());
    Ok(state_file)
}

/// 处理 serve 命令
pub async fn handle_http_server(args: HttpServerArgs, cfg: AppConfig) -> Result<(), CliError> {
    let session_id = args
        .session_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let config = ServerConfig::resolve(&args, &cfg);

    let (shutdown_tx, _) = broadcast::channel(1);
    let state = AppState::new(session_id.clone(), cfg, shutdown_tx);

    // 写入状态文件（在服务器启动前）
    let state_file = write_state_file(&session_id, &config)?;

    let served = start_server_with_config(session_id, config, state).await;

    // 删除状态文件
    if let Err(e) = fs::remove_file(&state_file) {
        warn!("Failed to remove state file: {}", e);
    } else {
        info!("State file removed: {}", state_file.display());
    }

    served.map_err(|e| CliError::Command(e.to_string()))
}

/// 使用自定义配置启动HTTP服务器
pub async fn start_server_with_config(
    session_id: String,
    config: ServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(
        "Starting HTTP server on {}:{} (session: {})",
        config.host, config.port, session_id
    );

    let app = create_router(state.clone())
        .layer(middleware::from_fn(request_logger))
        .layer(create_middleware_stack(config.request_timeout));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);

    let mut shutdown_rx = state.shutdown_tx.subscribe();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C signal");
                }
                _ = shutdown_rx.recv() => {
                    info!("Received shutdown signal from API");
                }
                _ = wait_for_sigterm() => {
                    info!("Received SIGTERM signal");
                }
            }

            info!("Starting graceful shutdown...");
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// 等待 SIGTERM 信号（Unix系统）
#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// Windows 系统不支持 SIGTERM，使用空操作
#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
