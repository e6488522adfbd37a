use thiserror::Error;

use super::resolve::ResolveError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("command failed: {0}")]
    Command(String),
    #[error("{0}")]
    Resolve(#[from] ResolveError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid task json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
