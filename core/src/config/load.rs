use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::AppConfig;

/// Get the default taskorder data directory: ~/.taskorder
pub fn get_taskorder_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".taskorder"))
}

/// Load one explicit config file, then apply environment overrides.
pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let mut cfg = read_config(path)?;
    apply_env_overrides(&mut cfg)?;
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.taskorder/config.toml (highest)
    let user_config = get_taskorder_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = if user_config.exists() {
        read_config(&user_config)?
    } else if local_config.exists() {
        read_config(local_config)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(&mut cfg)?;
    Ok(cfg)
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str::<AppConfig>(&s).with_context(|| format!("parse config {}", path.display()))
}

// Environment variable overrides (Priority 0: highest)
fn apply_env_overrides(cfg: &mut AppConfig) -> anyhow::Result<()> {
    if let Some(v) = non_blank_env("TASKORDER_HTTP_HOST") {
        cfg.http_server.host = v;
    }
    if let Some(v) = non_blank_env("TASKORDER_HTTP_PORT") {
        cfg.http_server.port = v
            .trim()
            .parse()
            .with_context(|| format!("invalid TASKORDER_HTTP_PORT: {v}"))?;
    }
    if let Some(v) = non_blank_env("TASKORDER_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    Ok(())
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[http_server]\nhost = \"0.0.0.0\"\nmax_tasks = 5\n\n[logging]\nfile = true\n",
        )
        .unwrap();

        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.http_server.max_tasks, 5);
        assert!(cfg.logging.file);
    }

    #[test]
    fn test_load_from_path_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[http_server\nport = ").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }
}
