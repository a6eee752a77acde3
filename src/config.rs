use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const KEYS: [&str; 2] = ["accent_color", "show_counts"];

/// Display preferences read from `config.toml`. Every field has a default, so
/// a missing file or a partial file both load.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub accent_color: String,
    pub show_counts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent_color: "cyan".to_string(),
            show_counts: true,
        }
    }
}

/// Resolved form of [`Config`] handed to the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub accent: Color,
    pub show_counts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            show_counts: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = get_config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.settings()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = get_config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write(e.to_string()))?;
        }

        fs::write(&config_path, self.to_toml()?)
            .map_err(|e| ConfigError::Write(e.to_string()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "accent_color" => Ok(self.accent_color.clone()),
            "show_counts" => Ok(self.show_counts.to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "accent_color" => {
                parse_color(value).ok_or_else(invalid)?;
                self.accent_color = value.to_string();
            }
            "show_counts" => {
                self.show_counts = value.parse().map_err(|_| invalid())?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let accent = parse_color(&self.accent_color).ok_or_else(|| ConfigError::InvalidValue {
            key: "accent_color".to_string(),
            value: self.accent_color.clone(),
        })?;

        Ok(Settings {
            accent,
            show_counts: self.show_counts,
        })
    }
}

fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

pub fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("todo-widget").join("config.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    ConfigDirNotFound,
    #[error("Failed to read config file: {0}")]
    Read(String),
    #[error("Failed to write config file: {0}")]
    Write(String),
    #[error("Failed to parse config file: {0}")]
    Parse(String),
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
    #[error("Unknown configuration key '{0}'. Supported keys: accent_color, show_counts")]
    UnknownKey(String),
    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml("show_counts = false\n").unwrap();
        assert_eq!(config.accent_color, "cyan");
        assert!(!config.show_counts);

        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.set("accent_color", "magenta").unwrap();
        config.set("show_counts", "false").unwrap();

        let parsed = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.settings().unwrap().accent, Color::Magenta);
    }

    #[test]
    fn test_hex_accent_color() {
        let config = Config::from_toml("accent_color = \"#ff8800\"\n").unwrap();
        assert_eq!(config.settings().unwrap().accent, Color::Rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_rejects_bad_color() {
        assert!(matches!(
            Config::from_toml("accent_color = \"not-a-colour\"\n"),
            Err(ConfigError::InvalidValue { .. })
        ));

        let mut config = Config::default();
        assert!(matches!(
            config.set("accent_color", "not-a-colour"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config.accent_color, "cyan");
    }

    #[test]
    fn test_rejects_bad_bool() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("show_counts", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unknown_key() {
        let mut config = Config::default();
        assert!(matches!(config.get("file_path"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(config.set("file_path", "x"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn test_get_values() {
        let config = Config::default();
        assert_eq!(config.get("accent_color").unwrap(), "cyan");
        assert_eq!(config.get("show_counts").unwrap(), "true");
    }

    #[test]
    fn test_malformed_file() {
        assert!(matches!(Config::from_toml("show_counts = "), Err(ConfigError::Parse(_))));
    }
}
