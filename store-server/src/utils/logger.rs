//! Logging infrastructure
//!
//! Structured logging setup with optional daily-rotated file output.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with stdout output only.
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger, writing to a daily-rotated file under `log_dir`
/// when the directory exists.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && dir.exists()
        && let Some(dir_str) = dir.to_str()
    {
        let file_appender = tracing_appender::rolling::daily(dir_str, "store-server");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
