//! Logging setup for the scanner CLI
//!
//! Console output respects the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=swatch::engine=debug` - module-level filtering
//!
//! File logging writes to `~/.config/swatch/logs/swatch.log` with daily
//! rotation, always at debug level for troubleshooting.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// `~/.config/swatch/logs` on Unix, `%APPDATA%\swatch\logs` on Windows
fn logs_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join("swatch").join("logs"))
}

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = logs_dir()
        .and_then(|dir| match std::fs::create_dir_all(&dir) {
            Ok(()) => Some(dir),
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        })
        .map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "swatch.log");
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new("debug"))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
