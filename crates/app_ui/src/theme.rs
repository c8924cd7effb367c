//! Application theming

use egui::{Color32, Visuals};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    pub surface: Color32,
    pub background: Color32,
    pub accent: Color32,
    /// Used for "NA" metric values
    pub muted: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            dark: true,
            surface: Color32::from_rgb(40, 42, 46),
            background: Color32::from_rgb(28, 29, 32),
            accent: Color32::from_rgb(100, 149, 237),
            muted: Color32::from_rgb(140, 140, 140),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            dark: false,
            surface: Color32::from_rgb(248, 248, 248),
            background: Color32::from_rgb(255, 255, 255),
            accent: Color32::from_rgb(59, 130, 246),
            muted: Color32::from_rgb(120, 120, 120),
        }
    }

    /// Apply theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark { Visuals::dark() } else { Visuals::light() };

        visuals.panel_fill = self.surface;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.selection.bg_fill = self.accent.linear_multiply(0.35);
        visuals.selection.stroke.color = self.accent;
        visuals.widgets.hovered.bg_fill = self.accent.linear_multiply(0.25);

        ctx.set_visuals(visuals);
    }

    /// Unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
