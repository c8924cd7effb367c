//! The file system as seen by the navigator

use crate::{gather_metrics, list_directory, FileEntry, FileMetrics, FsError, ListOptions, Result, UniversalPath};

/// Host file system operations used by the presenter
///
/// `LocalFileSystem` is the only production implementation; the trait is the
/// seam that keeps the navigator independent of `std::fs`.
pub trait FileSystem {
    /// Immediate children of `dir`
    fn list_directory(&self, dir: &UniversalPath, options: &ListOptions) -> Result<Vec<FileEntry>>;

    fn is_dir(&self, path: &UniversalPath) -> bool;

    fn parent(&self, path: &UniversalPath) -> Option<UniversalPath>;

    fn metrics(&self, path: &UniversalPath) -> Result<FileMetrics>;

    fn byte_length(&self, path: &UniversalPath) -> Result<u64>;

    /// Whole contents of `path`, at most `limit` bytes
    fn read_source(&self, path: &UniversalPath, limit: u64) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_directory(&self, dir: &UniversalPath, options: &ListOptions) -> Result<Vec<FileEntry>> {
        list_directory(dir.as_path(), options)
    }

    fn is_dir(&self, path: &UniversalPath) -> bool {
        path.is_dir()
    }

    fn parent(&self, path: &UniversalPath) -> Option<UniversalPath> {
        if crate::is_root(path.as_path()) {
            return None;
        }
        path.parent()
    }

    fn metrics(&self, path: &UniversalPath) -> Result<FileMetrics> {
        gather_metrics(path.as_path())
    }

    fn byte_length(&self, path: &UniversalPath) -> Result<u64> {
        std::fs::metadata(path.as_path())
            .map(|m| m.len())
            .map_err(|e| FsError::from_io(e, path.as_path()))
    }

    fn read_source(&self, path: &UniversalPath, limit: u64) -> Result<Vec<u8>> {
        use std::io::Read;

        let file = std::fs::File::open(path.as_path()).map_err(|e| FsError::from_io(e, path.as_path()))?;
        let mut data = Vec::new();
        file.take(limit).read_to_end(&mut data)?;
        Ok(data)
    }
}
