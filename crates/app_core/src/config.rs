//! Application configuration

use app_fs::{ListOptions, SortBy, SortOrder};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Largest file the preview pane will show, in bytes
pub const DEFAULT_PREVIEW_LIMIT: u64 = 128 * 1024;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub filer: FilerConfig,
    pub preview: PreviewConfig,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            filer: FilerConfig::default(),
            preview: PreviewConfig::default(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub theme: String,
    /// Directory opened at startup; the working directory when unset
    pub start_directory: Option<String>,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            start_directory: None,
            window_width: 1100,
            window_height: 700,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilerConfig {
    pub show_hidden_files: bool,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for FilerConfig {
    fn default() -> Self {
        Self {
            show_hidden_files: true,
            sort_by: SortBy::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl FilerConfig {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            show_hidden: self.show_hidden_files,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub max_file_size: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&content).map_err(crate::AppError::from)?;
            tracing::info!("Configuration loaded from {:?}", config_path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        ProjectDirs::from("org", "Fileman", "Fileman")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }
}

fn default_keybindings() -> HashMap<String, Vec<String>> {
    let mut kb = HashMap::new();

    kb.insert("file.refresh".into(), vec!["F5".into(), "Ctrl+r".into()]);
    kb.insert("nav.up_level".into(), vec!["Backspace".into(), "Alt+Up".into()]);
    kb.insert("app.exit".into(), vec!["Ctrl+q".into()]);

    kb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.preview.max_file_size, 131072);
        assert_eq!(config.general.start_directory, None);
        assert!(config.keybindings.contains_key("nav.up_level"));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [filer]
            sort_by = "size"
            sort_order = "desc"

            [preview]
            max_file_size = 2048
            "#,
        )
        .unwrap();

        assert_eq!(config.filer.sort_by, SortBy::Size);
        assert_eq!(config.filer.sort_order, SortOrder::Descending);
        assert!(config.filer.show_hidden_files);
        assert_eq!(config.preview.max_file_size, 2048);
        assert_eq!(config.general.theme, "dark");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.general.start_directory = Some("/srv/files".into());
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.general.start_directory.as_deref(), Some("/srv/files"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.preview.max_file_size, DEFAULT_PREVIEW_LIMIT);
    }
}
