//! Configuration file for the matrix tool.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::device::DEFAULT_DEVICES_DIR;

fn default_devices_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DEVICES_DIR)
}

/// Default seconds between frames of a directory effect.
fn default_delay() -> f32 {
    0.05
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Directory searched for device identifiers.
    #[serde(default = "default_devices_dir")]
    pub devices_dir: PathBuf,
    /// Extra effects played from directories of static frames.
    #[serde(default)]
    pub effects: Vec<DirectoryEffectConfig>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            devices_dir: default_devices_dir(),
            effects: Vec::new(),
        }
    }
}

/// An effect whose frames are the files of a directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEffectConfig {
    /// Name used to select the effect.
    pub name: String,
    /// Directory holding one image or text file per frame.
    pub directory: PathBuf,
    /// Seconds between frames.
    #[serde(default = "default_delay")]
    pub delay: f32,
}

impl DirectoryEffectConfig {
    /// Frame delay as a duration.
    pub fn delay(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f32(self.delay).map_err(|_| ConfigError::InvalidDelay {
            name: self.name.clone(),
            delay: self.delay,
        })
    }
}

impl MatrixConfig {
    /// Read and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, effect) in self.effects.iter().enumerate() {
            if effect.name.trim().is_empty() {
                return Err(ConfigError::EmptyEffectName { index: i });
            }
            effect.delay()?;
            if self.effects[..i].iter().any(|other| other.name == effect.name) {
                return Err(ConfigError::DuplicateEffect(effect.name.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Effect {index} has an empty name")]
    EmptyEffectName { index: usize },
    #[error("Effect {name} has invalid delay {delay}")]
    InvalidDelay { name: String, delay: f32 },
    #[error("Effect {0} is declared more than once")]
    DuplicateEffect(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: MatrixConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.devices_dir, PathBuf::from(DEFAULT_DEVICES_DIR));
        assert!(config.effects.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn test_effect_delay_default() {
        let config: MatrixConfig = serde_json::from_str(
            r#"{"effects": [{"name": "logo", "directory": "/tmp/logo"}]}"#,
        )
        .unwrap();
        assert_eq!(config.effects[0].delay, 0.05);
        assert_eq!(
            config.effects[0].delay().unwrap(),
            Duration::from_secs_f32(0.05)
        );
    }

    #[test]
    fn test_negative_delay_rejected() {
        let config = MatrixConfig {
            effects: vec![DirectoryEffectConfig {
                name: "logo".into(),
                directory: "/tmp/logo".into(),
                delay: -1.0,
            }],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDelay { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let effect = DirectoryEffectConfig {
            name: "logo".into(),
            directory: "/tmp/logo".into(),
            delay: 0.1,
        };
        let config = MatrixConfig {
            effects: vec![effect.clone(), effect],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateEffect(name)) if name == "logo"
        ));
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.json");

        let config = MatrixConfig {
            devices_dir: dir.path().to_owned(),
            effects: vec![DirectoryEffectConfig {
                name: "logo".into(),
                directory: dir.path().join("frames"),
                delay: 0.25,
            }],
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = MatrixConfig::load(&path).unwrap();
        assert_eq!(loaded.devices_dir, config.devices_dir);
        assert_eq!(loaded.effects[0].name, "logo");
        assert_eq!(loaded.effects[0].delay, 0.25);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(MatrixConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}
