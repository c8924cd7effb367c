//! Fileman - single-window file browser with image preview
//!
//! Main entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Result;

fn main() -> Result<()> {
    // Logging and panic hook first; the guard flushes the log file on exit
    let _log_guard = app_log::init()?;

    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("Fileman starting...");

    let config = match app_core::AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring unreadable configuration: {}", e);
            app_core::AppConfig::default()
        }
    };

    app::run(config)
}
