//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies to
//! this crate and `tower_http`.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional daily-rolling file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("delivery_server={level},tower_http={level}").into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "delivery-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("Log directory {dir} does not exist, logging to stdout");
    }

    subscriber.init();
}
