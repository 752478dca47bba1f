//! Logging utilities for the Kamal backend.
//!
//! All crates log through the `tracing` macros; this module owns the subscriber set up
//! once by the binary.

use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// When set, log lines are additionally written to a daily rolling file in this directory.
pub const LOG_DIR_VAR: &str = "LOG_DIR";

const LOG_FILE_PREFIX: &str = "kamal-backend.log";

/// Initialize the tracing subscriber at INFO level.
///
/// Keep the returned guard alive for the lifetime of the process, otherwise buffered
/// file output is lost.
///
/// # Examples
///
/// ```
/// let _guard = kamal_common::logging::init();
/// tracing::info!("ready");
/// ```
pub fn init() -> Option<WorkerGuard> {
    init_with_level(Level::INFO)
}

/// Initialize the tracing subscriber with a specific default level.
///
/// `RUST_LOG` takes precedence over `level` when it is set. Calling this more than once
/// is harmless: later calls leave the first subscriber in place.
pub fn init_with_level(level: Level) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", level)));

    let (file_layer, guard) = match std::env::var(LOG_DIR_VAR) {
        Ok(dir) if !dir.trim().is_empty() => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(file_layer)
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
    guard
}
