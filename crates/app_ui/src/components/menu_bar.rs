//! Main menu: File > Refresh, Up Level

use super::ToolbarAction;
use egui::Ui;

/// Menu bar component
pub struct MenuBar;

impl MenuBar {
    pub fn ui(ui: &mut Ui) -> Option<ToolbarAction> {
        let mut action = None;

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("🔄 Refresh").clicked() {
                    action = Some(ToolbarAction::Refresh);
                    ui.close_menu();
                }
                if ui.button("⬆ Up Level").clicked() {
                    action = Some(ToolbarAction::UpLevel);
                    ui.close_menu();
                }
            });
        });

        action
    }
}
