//! Bottom bar with the five file/disk metrics

use app_core::{MetricsView, NOT_AVAILABLE};
use egui::{Color32, RichText, Ui};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Captions above values, evenly spread across the bar
    pub fn ui(ui: &mut Ui, metrics: &MetricsView, muted: Color32) {
        let fields = metrics.fields();
        ui.columns(fields.len(), |columns| {
            for (column, (caption, value)) in columns.iter_mut().zip(fields) {
                column.vertical(|ui| {
                    ui.label(RichText::new(caption).small().weak());
                    if value == NOT_AVAILABLE {
                        ui.label(RichText::new(value).color(muted));
                    } else {
                        ui.label(value);
                    }
                });
            }
        });
    }
}
