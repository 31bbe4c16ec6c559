//! Desktop settings loaded from YAML

use chef_ui::stores::ConfigState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "INSTACHEF_CONFIG";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

/// Contents of `config.yaml`. Absent keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    pub narration_voice: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 390,
            window_height: 844,
            window_title: "InstaChef".to_string(),
            narration_voice: "English • Female voice".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// `$INSTACHEF_CONFIG`, else `<config dir>/instachef/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("instachef").join("config.yaml"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Like `load_from`, but a missing file is created with the defaults
    /// so there is something to edit after the first run.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config.save_to(path)?;
        info!("Wrote default config to {}", path.display());
        Ok(config)
    }

    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Display values handed to the UI store
    pub fn to_config_state(&self) -> ConfigState {
        ConfigState {
            app_name: self.window_title.clone(),
            narration_voice: self.narration_voice.clone(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_or_init_writes_defaults_on_first_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("instachef").join("config.yaml");
        let config = Config::load_or_init(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn load_or_init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "window_title: Chef
").unwrap();
        let config = Config::load_or_init(&path).unwrap();
        assert_eq!(config.window_title, "Chef");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "window_title: Chef
");
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_absent_keys() {
        let config = Config::parse("window_width: 430\nlog_filter: debug\n").unwrap();
        assert_eq!(config.window_width, 430);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.window_height, 844);
        assert_eq!(config.window_title, "InstaChef");
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(Config::parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn malformed_yaml_is_serialization_error() {
        let result = Config::parse("window_width: [not, a, number]");
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            window_title: "Chef".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn config_state_carries_title_and_voice() {
        let config = Config {
            window_title: "Chef".to_string(),
            narration_voice: "Italiano • Voce maschile".to_string(),
            ..Config::default()
        };
        let state = config.to_config_state();
        assert_eq!(state.app_name, "Chef");
        assert_eq!(state.narration_voice, "Italiano • Voce maschile");
        assert_eq!(state.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(state.app_version, "0.0.0-dev");
    }
}
