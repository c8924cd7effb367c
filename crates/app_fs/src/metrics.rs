//! File and disk metrics for the status bar

use crate::{FsError, Result};
use std::path::Path;
use std::time::SystemTime;

/// Space figures of the volume holding a path, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiskSpace {
    /// Available to the current user
    pub usable: u64,
    pub total: u64,
    /// Free including blocks reserved for the superuser
    pub free: u64,
}

/// Snapshot of one path's metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetrics {
    pub size: u64,
    pub last_modified: SystemTime,
    pub space: DiskSpace,
}

/// Gather size, timestamp and disk space for `path`
///
/// Fails if the path no longer exists or any figure cannot be read.
pub fn gather_metrics<P: AsRef<Path>>(path: P) -> Result<FileMetrics> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
    let last_modified = metadata.modified().map_err(|e| FsError::from_io(e, path))?;
    let space = disk_space(path)?;

    Ok(FileMetrics {
        size: metadata.len(),
        last_modified,
        space,
    })
}

#[cfg(unix)]
pub fn disk_space<P: AsRef<Path>>(path: P) -> Result<DiskSpace> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let path = path.as_ref();
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| FsError::InvalidPath(path.display().to_string()))?;

    let mut stat: MaybeUninit<libc::statvfs> = MaybeUninit::uninit();
    // SAFETY: c_path is a valid NUL-terminated string and stat is writable
    let result = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if result != 0 {
        return Err(FsError::from_io(std::io::Error::last_os_error(), path));
    }
    // SAFETY: statvfs returned 0, so stat is initialized
    let stat = unsafe { stat.assume_init() };

    let fragment = stat.f_frsize as u64;
    Ok(DiskSpace {
        usable: stat.f_bavail as u64 * fragment,
        total: stat.f_blocks as u64 * fragment,
        free: stat.f_bfree as u64 * fragment,
    })
}

/// The volume is the disk with the longest mount point that prefixes `path`
#[cfg(not(unix))]
pub fn disk_space<P: AsRef<Path>>(path: P) -> Result<DiskSpace> {
    use sysinfo::Disks;

    let path = path.as_ref();
    let lookup = crate::UniversalPath::new(path).to_string();
    let lookup = Path::new(&lookup);

    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .filter(|d| lookup.starts_with(d.mount_point()))
        .max_by_key(|d| d.mount_point().as_os_str().len())
        .ok_or_else(|| FsError::NotFound(format!("volume of {}", path.display())))?;

    // sysinfo does not report reserved blocks separately
    Ok(DiskSpace {
        usable: disk.available_space(),
        total: disk.total_space(),
        free: disk.available_space(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_for_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.bin");
        std::fs::write(&file, vec![0u8; 4096]).unwrap();

        let metrics = gather_metrics(&file).unwrap();
        assert_eq!(metrics.size, 4096);
        assert!(metrics.space.total > 0);
        assert!(metrics.space.usable <= metrics.space.total);
        assert!(metrics.space.free <= metrics.space.total);
    }

    #[test]
    fn test_metrics_for_deleted_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("gone.txt");
        std::fs::write(&file, b"soon gone").unwrap();
        std::fs::remove_file(&file).unwrap();

        assert!(matches!(gather_metrics(&file), Err(FsError::NotFound(_))));
    }
}
