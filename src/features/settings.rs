//! Application settings persistence
//!
//! Handles saving and loading user preferences. Every field has a default,
//! so a partial or missing settings file still loads.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::starfield::STAR_COUNT;

/// Default cooldown between quote changes
pub const DEFAULT_COOLDOWN_MS: u64 = 3000;
pub const MIN_COOLDOWN_MS: u64 = 500;
pub const MAX_COOLDOWN_MS: u64 = 60_000;
pub const MAX_STAR_COUNT: usize = 2000;

/// Application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Quote rotation settings
    pub carousel: CarouselSettings,
    /// Background decoration settings
    pub starfield: StarfieldSettings,
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Windowed-mode geometry
    pub window: WindowSettings,
}

/// Quote rotation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Lock time after a quote change, in milliseconds
    pub cooldown_ms: u64,
}

/// Background decoration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldSettings {
    /// Number of stars generated at startup
    pub count: usize,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Power saving mode - stars are drawn static and only transitions animate
    pub power_saving_mode: bool,
    /// Start in fullscreen
    pub fullscreen: bool,
}

/// Windowed-mode geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self { count: STAR_COUNT }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            power_saving_mode: false,
            fullscreen: true,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl CarouselSettings {
    /// Cooldown clamped to the supported range
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms.clamp(MIN_COOLDOWN_MS, MAX_COOLDOWN_MS))
    }
}

impl StarfieldSettings {
    /// Star count clamped to the supported range
    pub fn star_count(&self) -> usize {
        self.count.min(MAX_STAR_COUNT)
    }
}

impl WindowSettings {
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width.max(320.0), self.height.max(240.0))
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "quote-universe", "QuoteUniverse")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
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
    fn defaults_match_carousel_constants() {
        let settings = Settings::default();
        assert_eq!(settings.carousel.cooldown(), Duration::from_millis(3000));
        assert_eq!(settings.starfield.star_count(), 200);
        assert!(!settings.display.power_saving_mode);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let carousel = CarouselSettings { cooldown_ms: 1 };
        assert_eq!(carousel.cooldown(), Duration::from_millis(MIN_COOLDOWN_MS));
        let carousel = CarouselSettings {
            cooldown_ms: u64::MAX,
        };
        assert_eq!(carousel.cooldown(), Duration::from_millis(MAX_COOLDOWN_MS));
        let starfield = StarfieldSettings { count: 1_000_000 };
        assert_eq!(starfield.star_count(), MAX_STAR_COUNT);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "carousel": { "cooldown_ms": 1500 } }"#).unwrap();
        assert_eq!(settings.carousel.cooldown_ms, 1500);
        assert_eq!(settings.starfield, StarfieldSettings::default());
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn save_and_load_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.display.fullscreen = false;
        settings.starfield.count = 50;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
