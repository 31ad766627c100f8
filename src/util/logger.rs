use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};


/// Console plus daily-rolling file logging. Keep `guards` alive for the
/// lifetime of the process or buffered lines are lost on exit.
pub struct Logger {
    pub guards: Vec<WorkerGuard>,
}

impl Logger {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());
        let guards = Self::setup_logging(Path::new(&log_dir))?;
        Ok(Logger { guards })
    }

    pub fn setup_logging(log_dir: &Path) -> Result<Vec<WorkerGuard>, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(log_dir.join("error"))?;
        std::fs::create_dir_all(log_dir.join("json"))?;

        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,wrp_backend=debug"));

        let file_log_level = std::env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let error_file_log_level = std::env::var("ERROR_FILE_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let general_file = rolling::daily(log_dir, "wrp-backend.log");
        let (non_blocking_general, general_guard) = non_blocking(general_file);

        let error_file = rolling::daily(log_dir.join("error"), "wrp-backend-error.log");
        let (non_blocking_error, error_guard) = non_blocking(error_file);

        let json_file = rolling::daily(log_dir.join("json"), "wrp-backend.json");
        let (non_blocking_json, json_guard) = non_blocking(json_file);

        tracing_subscriber::registry()
            .with(
                // Console output - pretty format for development
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(true)
                    .with_filter(console_filter)
            )
            .with(
                fmt::layer()
                    .with_writer(non_blocking_general)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&file_log_level))
            )
            .with(
                fmt::layer()
                    .with_writer(non_blocking_error)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&error_file_log_level))
            )
            .with(
                // Structured copy of the general log for shipping
                fmt::layer()
                    .json()
                    .with_writer(non_blocking_json)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(&file_log_level))
            )
            .try_init()?;

        Ok(vec![general_guard, error_guard, json_guard])
    }
}
