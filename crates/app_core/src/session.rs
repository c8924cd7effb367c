//! Session bootstrap: where a new window starts browsing

use crate::{AppConfig, NavigationState};
use app_fs::UniversalPath;
use std::path::PathBuf;

/// Initial directory, first match wins:
/// configured start directory, working directory, home, filesystem root
pub fn default_directory(config: &AppConfig) -> UniversalPath {
    let configured = config
        .general
        .start_directory
        .as_deref()
        .map(PathBuf::from)
        .filter(|p| {
            let ok = p.is_dir();
            if !ok {
                tracing::warn!("Configured start directory {:?} is not a directory", p);
            }
            ok
        });

    let path = configured
        .or_else(|| std::env::current_dir().ok())
        .or_else(dirs_next::home_dir)
        .unwrap_or_else(|| PathBuf::from("/"));

    UniversalPath::new(path)
}

/// Fresh navigation state for a new session
pub fn start(config: &AppConfig) -> NavigationState {
    let directory = default_directory(config);
    tracing::info!("Session starting in {}", directory);
    NavigationState::new(directory)
}
