//! Prayer timetable loaded from a JSON file.
//!
//! The file maps ISO dates to that day's prayer times:
//!
//! ```json
//! {
//!   "2025-03-14": { "fajr": "04:58", "sunrise": "06:21", "dhuhr": "12:14",
//!                   "asr": "15:21", "maghrib": "18:07", "isha": "19:30" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::prayer_times::PrayerTimes;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("timetable not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read timetable {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed timetable {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid date key {key:?} in timetable")]
    InvalidDate { key: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    days: BTreeMap<NaiveDate, PrayerTimes>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, TimetableError> {
        let data = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                TimetableError::NotFound(path.to_path_buf())
            } else {
                TimetableError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let raw: BTreeMap<String, PrayerTimes> =
            serde_json::from_str(&data).map_err(|source| TimetableError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let timetable = Self::from_raw(raw)?;
        log::info!(
            "Loaded prayer timetable from {} ({} days)",
            path.display(),
            timetable.len()
        );
        Ok(timetable)
    }

    pub fn from_raw(raw: BTreeMap<String, PrayerTimes>) -> Result<Self, TimetableError> {
        let mut days = BTreeMap::new();
        for (key, times) in raw {
            let date = NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
                .map_err(|_| TimetableError::InvalidDate { key: key.clone() })?;
            days.insert(date, times);
        }
        Ok(Self { days })
    }

    pub fn insert(&mut self, date: NaiveDate, times: PrayerTimes) {
        self.days.insert(date, times);
    }

    pub fn for_date(&self, date: NaiveDate) -> Option<&PrayerTimes> {
        self.days.get(&date)
    }

    /// First and last dates covered, if any.
    pub fn coverage(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.days.keys().next()?;
        let last = self.days.keys().next_back()?;
        Some((*first, *last))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prayer_times::{FAJR, MAGHRIB};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_lookup() {
        let file = write_temp(
            r#"{
                "2025-03-14": {"fajr": "04:58", "maghrib": "18:07"},
                "2025-03-15": {"fajr": "04:56", "maghrib": "18:09"}
            }"#,
        );

        let timetable = Timetable::load(file.path()).unwrap();

        assert_eq!(timetable.len(), 2);
        let times = timetable.for_date(ymd(2025, 3, 15)).unwrap();
        assert_eq!(times.get(FAJR), Some("04:56"));
        assert_eq!(times.get(MAGHRIB), Some("18:09"));
        assert!(timetable.for_date(ymd(2025, 3, 16)).is_none());
        assert_eq!(timetable.coverage(), Some((ymd(2025, 3, 14), ymd(2025, 3, 15))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetable.json");
        let err = Timetable::load(&path).unwrap_err();
        assert!(matches!(err, TimetableError::NotFound(p) if p == path));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_temp("{ not json");
        let err = Timetable::load(file.path()).unwrap_err();
        assert!(matches!(err, TimetableError::Parse { .. }));
    }

    #[test]
    fn test_invalid_date_key() {
        let file = write_temp(r#"{"14/03/2025": {"fajr": "04:58"}}"#);
        let err = Timetable::load(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "invalid date key \"14/03/2025\" in timetable");
    }

    #[test]
    fn test_empty_timetable_has_no_coverage() {
        assert!(Timetable::new().coverage().is_none());
        assert!(Timetable::new().is_empty());
    }
}
