use anyhow::Context;
use std::{
    fs,
    path::Path,
};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const MAX_LOG_AGE_DAYS: i64 = 3;

#[allow(dead_code)]
pub struct LoggerGuard(WorkerGuard);

pub fn is_known_level(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error")
}

/// Fall back to `info` for anything tracing would not understand
pub fn normalize_level(level: &str) -> &str {
    if is_known_level(level) { level } else { "info" }
}

/// Daily rolling file under `log_dir` plus a stderr layer.
///
/// stdout is reserved for the comparison table, so the console layer
/// writes to stderr at its own (usually quieter) level.
pub fn init_logging(
    log_dir: impl AsRef<Path>,
    prefix: &str,
    file_level: &str,
    console_level: &str,
) -> anyhow::Result<LoggerGuard> {
    let log_dir = log_dir.as_ref().to_path_buf();
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();

    let file_filter = EnvFilter::builder()
        .with_default_directive(normalize_level(file_level).parse()?)
        .parse_lossy(&rust_log);
    let console_filter = EnvFilter::builder()
        .with_default_directive(normalize_level(console_level).parse()?)
        .parse_lossy(&rust_log);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create file appender")?;
    let (non_blocking, guard) = NonBlocking::new(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(file_filter);
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    for (target, level) in [("file", file_level), ("console", console_level)] {
        if !is_known_level(level) {
            tracing::warn!("Invalid {} log level '{}', defaulting to 'info'", target, level);
        }
    }

    match cleanup_old_logs(&log_dir, prefix, MAX_LOG_AGE_DAYS) {
        Ok(0) => {}
        Ok(n) => tracing::info!("Deleted {} old log files from {:?}", n, log_dir),
        Err(e) => tracing::warn!("Failed to delete old log files: {}", e),
    }

    Ok(LoggerGuard(guard))
}

/// Remove `{prefix}*.log` files last modified more than `days_to_keep` days ago
pub fn cleanup_old_logs(log_dir: &Path, prefix: &str, days_to_keep: i64) -> std::io::Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let cutoff_time = chrono::Utc::now() - chrono::Duration::days(days_to_keep);
    let mut deleted_count = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !(file_name.starts_with(prefix) && file_name.ends_with(".log")) {
            continue;
        }

        let modified: chrono::DateTime<chrono::Utc> = fs::metadata(&path)?.modified()?.into();
        if modified < cutoff_time {
            fs::remove_file(&path)?;
            deleted_count += 1;
            tracing::debug!("Old log file deleted: {}", file_name);
        }
    }

    Ok(deleted_count)
}
