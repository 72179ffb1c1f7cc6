// Test fixtures - reusable test data
// Provides consistent timetable and date data across integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use prayer_schedule::models::prayer_times::PrayerTimes;
use std::path::{Path, PathBuf};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday 14 March 2025, mid-Ramadan 1446
    pub fn ramadan_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    /// 28 Feb 2025, crossing into March for offset checks
    pub fn end_of_february() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    }

    /// 31 Dec 2024, crossing a year boundary
    pub fn new_years_eve() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample prayer times for testing
pub mod times {
    use super::*;

    pub fn full_day(fajr: &str, maghrib: &str, isha: &str) -> PrayerTimes {
        PrayerTimes::new()
            .with("fajr", fajr)
            .with("sunrise", "06:20")
            .with("dhuhr", "12:14")
            .with("asr", "15:21")
            .with("maghrib", maghrib)
            .with("isha", isha)
    }
}

/// Writes a three-day timetable starting at `start` into `dir`.
pub fn write_timetable(dir: &Path, start: NaiveDate) -> PathBuf {
    let rows = [
        ("04:58", "18:07", "19:30"),
        ("04:56", "18:09", "19:32"),
        ("04:54", "18:10", "19:33"),
    ];

    let body: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(offset, (fajr, maghrib, isha))| {
            let date = start + chrono::Duration::days(offset as i64);
            format!(
                r#""{}": {{"fajr": "{}", "sunrise": "06:20", "dhuhr": "12:14", "asr": "15:21", "maghrib": "{}", "isha": "{}"}}"#,
                date.format("%Y-%m-%d"),
                fajr,
                maghrib,
                isha
            )
        })
        .collect();

    let path = dir.join("timetable.json");
    std::fs::write(&path, format!("{{{}}}", body.join(",\n"))).unwrap();
    path
}
