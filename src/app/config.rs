//! Configuration for the desk terminal

use serde::{Deserialize, Serialize};

use crate::command::{Body, CommandInterpreter, Settings, SkyPreset, DAY_PRESET, NIGHT_PRESET};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Text grid and feedback settings
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// Initial scene settings and sky presets
    #[serde(default)]
    pub scene: SceneConfig,
}

/// Text grid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Characters per display line
    pub wrap_width: usize,
    /// Display lines kept in the scrollback window
    pub visible_lines: usize,
    /// Marker drawn after the last typed character
    pub cursor: char,
    /// Screen glow per visible non-space character
    pub brightness_scale: f32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            wrap_width: 48,
            visible_lines: 15,
            cursor: '_',
            brightness_scale: 2.0,
        }
    }
}

/// Scene state at session start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Lamp light colour (0xRRGGBB)
    pub lamp_color: u32,
    /// Lamp intensity while on
    pub lamp_intensity: f32,
    /// Monitor text colour (0xRRGGBB)
    pub screen_color: u32,
    /// Sky used by `time day_` and at startup
    pub day: SkyPreset,
    /// Sky used by `time night_`
    pub night: SkyPreset,
    /// Body shown on the globe at startup
    pub body: Body,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            lamp_color: settings.lamp_color,
            lamp_intensity: settings.lamp_intensity,
            screen_color: settings.screen_color,
            day: DAY_PRESET,
            night: NIGHT_PRESET,
            body: settings.selected_body,
        }
    }
}

impl SceneConfig {
    /// Settings for a fresh session
    pub fn initial_settings(&self) -> Settings {
        Settings {
            lamp_color: self.lamp_color,
            lamp_intensity: self.lamp_intensity,
            saved_intensity: self.lamp_intensity,
            screen_color: self.screen_color,
            sky_color: self.day.color,
            sky_intensity: self.day.intensity,
            is_night: false,
            selected_body: self.body,
        }
    }

    /// Interpreter using these sky presets
    pub fn interpreter(&self) -> CommandInterpreter {
        CommandInterpreter::new(self.day, self.night)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/deskterm/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Reject values the terminal cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminal.wrap_width == 0 {
            return Err(ConfigError::Invalid("wrap_width must be at least 1".into()));
        }
        if self.terminal.visible_lines == 0 {
            return Err(ConfigError::Invalid(
                "visible_lines must be at least 1".into(),
            ));
        }
        let scale = self.terminal.brightness_scale;
        if scale.is_nan() || scale < 0.0 {
            return Err(ConfigError::Invalid(
                "brightness_scale must be non-negative".into(),
            ));
        }
        if self.terminal.cursor.is_control() {
            return Err(ConfigError::Invalid(
                "cursor must be a printable character".into(),
            ));
        }
        Ok(())
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<std::path::PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| std::path::PathBuf::from(home).join(".config").join("deskterm"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.terminal.wrap_width, 48);
        assert_eq!(config.terminal.visible_lines, 15);
        assert_eq!(config.terminal.brightness_scale, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_initial_settings_match_defaults() {
        let config = Config::default();
        assert_eq!(config.scene.initial_settings(), Settings::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"terminal": {"wrap_width": 32}}"#).unwrap();
        assert_eq!(config.terminal.wrap_width, 32);
        assert_eq!(config.terminal.visible_lines, 15);
        assert_eq!(config.scene.body, Body::Earth);
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let mut config = Config::default();
        config.terminal.wrap_width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.terminal.brightness_scale = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.scene.lamp_color = 0x123456;
        config.scene.body = Body::Moon;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(Config::load(&path), Err(ConfigError::Io(_))));
    }
}
