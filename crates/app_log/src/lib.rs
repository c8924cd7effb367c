//! Fileman logging and crash reporting
//!
//! Structured logging to the console and a rolling JSON file, plus a panic
//! hook that leaves a crash report behind.

mod panic_hook;
mod logging;

pub use panic_hook::{init_panic_hook, crash_report};
pub use logging::{init_logging, cleanup_old_logs, cleanup_logs_in, LogGuard};

use std::path::PathBuf;
use directories::ProjectDirs;

/// Get the application log directory
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("org", "Fileman", "Fileman")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialize logging and the panic hook
///
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init() -> anyhow::Result<LogGuard> {
    let guard = init_logging()?;
    init_panic_hook();
    Ok(guard)
}
