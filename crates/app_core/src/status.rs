//! Status bar texts for the five file/disk metrics

use app_fs::{FileMetrics, FsError};
use chrono::{DateTime, Local};

/// Shown in every metric field when the metrics cannot be read
pub const NOT_AVAILABLE: &str = "NA";

pub const METRIC_CAPTIONS: [&str; 5] = [
    "File Size (Bytes)",
    "File Date",
    "Usable Space (Bytes)",
    "Total Space (Bytes)",
    "Free Space (Bytes)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsView {
    pub size: String,
    pub date: String,
    pub usable_space: String,
    pub total_space: String,
    pub free_space: String,
}

impl MetricsView {
    pub fn not_available() -> Self {
        Self {
            size: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
            usable_space: NOT_AVAILABLE.to_string(),
            total_space: NOT_AVAILABLE.to_string(),
            free_space: NOT_AVAILABLE.to_string(),
        }
    }

    /// Every error kind collapses to "NA"
    pub fn from_result(result: &Result<FileMetrics, FsError>) -> Self {
        match result {
            Ok(metrics) => Self::from_metrics(metrics),
            Err(e) => {
                tracing::debug!("Metrics unavailable: {}", e);
                Self::not_available()
            }
        }
    }

    pub fn from_metrics(metrics: &FileMetrics) -> Self {
        let modified: DateTime<Local> = metrics.last_modified.into();
        Self {
            size: metrics.size.to_string(),
            date: modified.format("%a %b %d %H:%M:%S %:z %Y").to_string(),
            usable_space: metrics.space.usable.to_string(),
            total_space: metrics.space.total.to_string(),
            free_space: metrics.space.free.to_string(),
        }
    }

    /// (caption, value) pairs in display order
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            (METRIC_CAPTIONS[0], self.size.as_str()),
            (METRIC_CAPTIONS[1], self.date.as_str()),
            (METRIC_CAPTIONS[2], self.usable_space.as_str()),
            (METRIC_CAPTIONS[3], self.total_space.as_str()),
            (METRIC_CAPTIONS[4], self.free_space.as_str()),
        ]
    }
}

impl Default for MetricsView {
    fn default() -> Self {
        Self::not_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_fs::DiskSpace;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_values_are_plain_byte_counts() {
        let metrics = FileMetrics {
            size: 50_000,
            last_modified: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
            space: DiskSpace {
                usable: 10,
                total: 30,
                free: 20,
            },
        };

        let view = MetricsView::from_metrics(&metrics);
        assert_eq!(view.size, "50000");
        assert_eq!(view.usable_space, "10");
        assert_eq!(view.total_space, "30");
        assert_eq!(view.free_space, "20");
        assert!(view.date.contains("2023"));
    }

    #[test]
    fn test_any_error_is_na() {
        let denied: Result<FileMetrics, FsError> = Err(FsError::AccessDenied("/root".into()));
        let view = MetricsView::from_result(&denied);
        assert!(view.fields().iter().all(|(_, value)| *value == NOT_AVAILABLE));
    }
}
