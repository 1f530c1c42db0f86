//! Tracing setup: stderr plus a daily rolling log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// File name prefix of the rolling log (`greene-genie.log.YYYY-MM-DD`).
pub const LOG_FILE_PREFIX: &str = "greene-genie.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. When `logs_dir` is
/// given, events are also written there; the returned guard must be kept
/// alive for the file writer to flush.
pub fn init(default_filter: &str, logs_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let file_writer = logs_dir.and_then(|dir| match std::fs::create_dir_all(dir) {
        Ok(()) => Some(tracing_appender::non_blocking(
            tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX),
        )),
        Err(e) => {
            eprintln!("Log directory {:?} unavailable, logging to stderr only: {}", dir, e);
            None
        }
    });

    match file_writer {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}
