//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and motion settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Last window geometry
    #[serde(default)]
    pub window: WindowSettings,
}

/// Display and motion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Disable reveal transitions and the cursor marker's smoothing loop
    #[serde(default)]
    pub reduced_motion: bool,
    /// Draw the custom cursor marker
    #[serde(default = "default_true")]
    pub cursor_trail: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            cursor_trail: true,
        }
    }
}

/// Window geometry persisted across runs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl WindowSettings {
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width, self.height)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "maflah", "Showreel")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_motion() {
        let settings = Settings::default();
        assert!(!settings.display.reduced_motion);
        assert!(settings.display.cursor_trail);
        assert_eq!(settings.window.width, 1280.0);
        assert_eq!(settings.window.height, 860.0);
    }

    #[test]
    fn settings_round_trip() {
        let path = std::env::temp_dir().join("showreel-settings-roundtrip.json");
        let mut settings = Settings::default();
        settings.display.reduced_motion = true;
        settings.display.cursor_trail = false;
        settings.window.width = 999.0;

        settings.save_to_file(&path).expect("save settings");
        let loaded = Settings::load_from_file(&path).expect("load settings");
        let _ = std::fs::remove_file(&path);

        assert!(loaded.display.reduced_motion);
        assert!(!loaded.display.cursor_trail);
        assert_eq!(loaded.window.width, 999.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("parse empty object");
        assert!(settings.display.cursor_trail);
    }
}
