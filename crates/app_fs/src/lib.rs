//! Fileman file system layer
//!
//! Everything the navigator needs from the host file system:
//! - UniversalPath: path wrapper with a stable display string
//! - Non-recursive directory listing
//! - File and disk metrics
//! - Byte sources for the preview pane
//! - The `FileSystem` trait the presenter talks to

mod universal_path;
mod browser;
mod metrics;
mod host;

pub use universal_path::UniversalPath;
pub use browser::{FileEntry, EntryIcon, ListOptions, SortBy, SortOrder, list_directory, is_root};
pub use metrics::{FileMetrics, DiskSpace, gather_metrics, disk_space};
pub use host::{FileSystem, LocalFileSystem};

use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => FsError::AccessDenied(path.display().to_string()),
            _ => FsError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
