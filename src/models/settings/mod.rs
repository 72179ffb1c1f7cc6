// Settings module
// User configuration persisted as config.toml

use std::path::PathBuf;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const MIN_TICK_INTERVAL_MS: u64 = 100;
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;
pub const MAX_HIJRI_ADJUSTMENT_DAYS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system's light/dark mode
    System,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::System
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Date the "today" card is anchored to. `None` means the current date.
    pub base_date: Option<NaiveDate>,
    /// IANA zone of the timetable, e.g. `"Europe/London"`. `None` uses the
    /// machine's local zone.
    pub timezone: Option<String>,
    pub theme: ThemePreference,
    /// Prayer timetable JSON. Defaults to `timetable.json` in the data dir.
    pub timetable_path: Option<PathBuf>,
    /// SQLite event store. Defaults to `events.db` in the data dir.
    pub database_path: Option<PathBuf>,
    /// Days added to the computed Hijri date to match local moon sighting.
    pub hijri_adjustment_days: i64,
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_date: None,
            timezone: None,
            theme: ThemePreference::System,
            timetable_path: None,
            database_path: None,
            hijri_adjustment_days: 0,
            tick_interval_ms: 1000,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        self.timezone()?;

        if self.hijri_adjustment_days.abs() > MAX_HIJRI_ADJUSTMENT_DAYS {
            return Err(format!(
                "Hijri adjustment must be between -{0} and {0} days",
                MAX_HIJRI_ADJUSTMENT_DAYS
            ));
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "Tick interval must be between {} and {} ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }

        Ok(())
    }

    /// Parsed time zone, if one is configured.
    pub fn timezone(&self) -> Result<Option<Tz>, String> {
        match self.timezone.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| format!("Unknown time zone: {}", name)),
        }
    }
}
