//! File table: one row per child of the current directory

use app_core::{Activation, FileEntryRow};
use app_fs::UniversalPath;
use egui::Ui;

/// File table component
pub struct FileTable;

impl FileTable {
    /// Render the rows; returns the activation of this frame, if any
    ///
    /// A double click also reports a click on the same frame, so the
    /// double activation takes precedence.
    pub fn ui(ui: &mut Ui, rows: &[FileEntryRow], selected: Option<&UniversalPath>) -> Option<Activation> {
        let mut activation = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("file_table")
                    .num_columns(3)
                    .striped(true)
                    .min_col_width(80.0)
                    .show(ui, |ui| {
                        ui.strong("Name");
                        ui.strong("Size");
                        ui.strong("Last Modified");
                        ui.end_row();

                        for row in rows {
                            let is_selected = selected == Some(&row.entry_path);
                            let label = format!("{} {}", row.icon.glyph(), row.name);

                            let response = ui.selectable_label(is_selected, label);
                            ui.label(if row.is_dir { String::new() } else { format_size(row.size) });
                            ui.label(format_date(row.modified));
                            ui.end_row();

                            if response.double_clicked() {
                                activation = Some(Activation::Double(row.entry_path.clone()));
                            } else if response.clicked() && activation.is_none() {
                                activation = Some(Activation::Single(row.entry_path.clone()));
                            }
                        }
                    });
            });

        activation
    }
}

pub(crate) fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn format_date(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(50_000), "48.8 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some(0)).len(), "1970-01-01 00:00".len());
    }
}
