//! Top bar: Refresh, Up Level and the current path / selected file

use egui::Ui;

/// Toolbar component
pub struct Toolbar;

impl Toolbar {
    pub fn ui(ui: &mut Ui, status_label: &str, can_go_up: bool) -> Option<ToolbarAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("🔄 Refresh").on_hover_text("Refresh (F5)").clicked() {
                action = Some(ToolbarAction::Refresh);
            }

            ui.add_enabled_ui(can_go_up, |ui| {
                if ui.button("⬆ Up Level").on_hover_text("Up Level (Backspace)").clicked() {
                    action = Some(ToolbarAction::UpLevel);
                }
            });

            ui.separator();

            // Fills the rest of the bar
            ui.with_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight), |ui| {
                ui.add(egui::Label::new(status_label).truncate());
            });
        });

        action
    }
}

/// Toolbar actions, shared with the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Refresh,
    UpLevel,
}

impl ToolbarAction {
    pub fn command(self) -> app_core::Command {
        match self {
            ToolbarAction::Refresh => app_core::Command::refresh(),
            ToolbarAction::UpLevel => app_core::Command::up_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::CommandId;

    #[test]
    fn test_actions_map_to_commands() {
        assert_eq!(ToolbarAction::Refresh.command().id.as_str(), CommandId::FILE_REFRESH);
        assert_eq!(ToolbarAction::UpLevel.command().id.as_str(), CommandId::NAV_UP_LEVEL);
    }
}
