use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";
const LOG_FILE_NAME: &str = "backend.log";

/// Инициализация tracing: stdout (с цветами) и `logs/backend.log` (без цветов).
///
/// Уровень берётся из `RUST_LOG`, по умолчанию `info` с приглушёнными
/// hyper и reqwest.
pub fn initialize() -> anyhow::Result<PathBuf> {
    let log_dir = log_dir(std::env::current_exe().ok().as_deref());
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Cannot create log directory {}", log_dir.display()))?;

    let log_file_path = log_dir.join(LOG_FILE_NAME);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("Cannot open log file {}", log_file_path.display()))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(log_file_path)
}

/// Каталог логов рядом с исполняемым файлом, иначе target/logs
fn log_dir(exe_path: Option<&Path>) -> PathBuf {
    match exe_path.and_then(Path::parent) {
        Some(exe_dir) => exe_dir.join("logs"),
        None => Path::new("target").join("logs"),
    }
}
