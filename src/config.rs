use crate::domain::{Light, ReminderDraft, Room, WaterAmount, WaterDays};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Default event poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Values the reminder sheet starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderDefaults {
    pub room: Room,
    pub light: Light,
    pub water_days: WaterDays,
    pub water_amount: WaterAmount,
}

impl ReminderDefaults {
    /// Fresh draft with these selections and an empty name
    pub fn draft(&self) -> ReminderDraft {
        ReminderDraft {
            name: String::new(),
            room: self.room,
            light: self.light,
            water_days: self.water_days,
            water_amount: self.water_amount,
        }
    }
}

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Use emoji icons (ASCII fallbacks otherwise)
    pub use_emoji: bool,
    /// Event poll timeout
    pub poll_ms: u64,
    /// Start without the sample garden (shows the welcome screen)
    pub start_empty: bool,
    pub reminder_defaults: ReminderDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_emoji: true,
            poll_ms: DEFAULT_POLL_MS,
            start_empty: false,
            reminder_defaults: ReminderDefaults::default(),
        }
    }
}

/// Directory holding config and logs (~/.plants)
pub fn plants_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".plants"))
}

/// Default config path (~/.plants/config.json)
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(plants_dir()?.join("config.json"))
}

/// Load config from `path`; a missing file yields the defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a default config to `path`, refusing to overwrite an existing one
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let config = Config::default();
    save_config(path, &config)?;
    Ok(config)
}

/// Save config atomically (temp file + rename)
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp_file.write_all(json.as_bytes()).map_err(io_err)?;
    temp_file.flush().map_err(io_err)?;
    temp_file.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempdir().unwrap();
        let config = load_config(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.use_emoji);
        assert_eq!(config.poll_ms, 250);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "use_emoji": false, "reminder_defaults": { "room": "balcony", "water_days": "every_3_days" } }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert!(!config.use_emoji);
        assert_eq!(config.poll_ms, DEFAULT_POLL_MS);
        assert_eq!(config.reminder_defaults.room, Room::Balcony);
        assert_eq!(config.reminder_defaults.water_days, WaterDays::Every3Days);
        assert_eq!(config.reminder_defaults.light, Light::FullSun);
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "reminder_defaults": { "room": "garage" } }"#).unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_init_and_reload() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let written = init_config(&path).unwrap();
        assert!(path.exists());
        assert_eq!(load_config(&path).unwrap(), written);

        let err = init_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }

    #[test]
    fn test_defaults_draft() {
        let defaults = ReminderDefaults {
            room: Room::Kitchen,
            light: Light::LowLight,
            water_days: WaterDays::OnceAWeek,
            water_amount: WaterAmount::Ml200To300,
        };
        let draft = defaults.draft();
        assert_eq!(draft.room, Room::Kitchen);
        assert_eq!(draft.water_amount, WaterAmount::Ml200To300);
        assert!(draft.name.is_empty());
    }
}
