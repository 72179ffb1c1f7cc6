//! Settings persistence.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file is not an error: the defaults apply until the user writes one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

const CONFIG_FILE: &str = "config.toml";
const TIMETABLE_FILE: &str = "timetable.json";
const DATABASE_FILE: &str = "events.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
    #[error("could not determine a home directory for application data")]
    NoProjectDirs,
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("com", "PrayerSchedule", "PrayerSchedule").ok_or(ConfigError::NoProjectDirs)
}

pub struct SettingsService;

impl SettingsService {
    /// `<config dir>/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let settings: Settings = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate().map_err(ConfigError::Invalid)?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Validate and write settings, creating parent directories as needed.
    pub fn save(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::Invalid)?;
        let data = toml::to_string_pretty(settings)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, data).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Timetable location: the configured path or `<data dir>/timetable.json`.
    pub fn timetable_path(settings: &Settings) -> Result<PathBuf, ConfigError> {
        match &settings.timetable_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join(TIMETABLE_FILE)),
        }
    }

    /// Event store location: the configured path or `<data dir>/events.db`.
    pub fn database_path(settings: &Settings) -> Result<PathBuf, ConfigError> {
        match &settings.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join(DATABASE_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsService::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let settings = Settings {
            base_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            timezone: Some("Europe/London".to_string()),
            theme: ThemePreference::Dark,
            timetable_path: Some(PathBuf::from("/srv/masjid/timetable.json")),
            hijri_adjustment_days: -1,
            ..Settings::default()
        };

        SettingsService::save(&path, &settings).unwrap();
        let loaded = SettingsService::load(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_date = \"2025-03-01\"\ntheme = \"light\"\n").unwrap();

        let settings = SettingsService::load(&path).unwrap();

        assert_eq!(settings.base_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(settings.theme, ThemePreference::Light);
        assert_eq!(settings.tick_interval_ms, 1000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = SettingsService::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timezone = \"Nowhere/Special\"\n").unwrap();

        let err = SettingsService::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let bad = Settings {
            hijri_adjustment_days: 9,
            ..Settings::default()
        };
        assert!(SettingsService::save(&path, &bad).is_err());
    }

    #[test]
    fn test_configured_paths_win() {
        let settings = Settings {
            timetable_path: Some(PathBuf::from("times.json")),
            database_path: Some(PathBuf::from("events.sqlite")),
            ..Settings::default()
        };
        assert_eq!(
            SettingsService::timetable_path(&settings).unwrap(),
            PathBuf::from("times.json")
        );
        assert_eq!(
            SettingsService::database_path(&settings).unwrap(),
            PathBuf::from("events.sqlite")
        );
    }
}
