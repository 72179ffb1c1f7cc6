// Prayer times model
// Raw timetable entries for a single day, keyed by prayer name

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::date::parse_clock_time;

pub const FAJR: &str = "fajr";
pub const SUNRISE: &str = "sunrise";
pub const DHUHR: &str = "dhuhr";
pub const ASR: &str = "asr";
pub const MAGHRIB: &str = "maghrib";
pub const ISHA: &str = "isha";

/// Display order for well-known prayers. Unknown keys follow alphabetically.
const CANONICAL_ORDER: [&str; 6] = [FAJR, SUNRISE, DHUHR, ASR, MAGHRIB, ISHA];

/// Prayer name to clock string (`"HH:MM"`) for one day.
///
/// Values are kept exactly as supplied so the list renderer can show them
/// verbatim; [`PrayerTimes::time_of`] does the lenient parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrayerTimes {
    entries: BTreeMap<String, String>,
}

impl PrayerTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. Names are stored lowercase.
    pub fn with(mut self, name: impl AsRef<str>, time: impl Into<String>) -> Self {
        self.insert(name, time);
        self
    }

    pub fn insert(&mut self, name: impl AsRef<str>, time: impl Into<String>) {
        self.entries
            .insert(name.as_ref().trim().to_lowercase(), time.into());
    }

    /// Raw string for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Parsed clock time for `name`. Missing or malformed entries give `None`.
    pub fn time_of(&self, name: &str) -> Option<NaiveTime> {
        let raw = self.get(name)?;
        let parsed = parse_clock_time(raw);
        if parsed.is_none() {
            log::debug!("Ignoring malformed {} time {:?}", name, raw);
        }
        parsed
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in display order: canonical prayers first, then the rest by name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut ordered: Vec<(&str, &str)> = CANONICAL_ORDER
            .iter()
            .filter_map(|name| self.entries.get_key_value(*name))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        ordered.extend(
            self.entries
                .iter()
                .filter(|(k, _)| !CANONICAL_ORDER.contains(&k.as_str()))
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );

        ordered
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for PrayerTimes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut times = PrayerTimes::new();
        for (name, time) in iter {
            times.insert(name, time);
        }
        times
    }
}

/// Title-case a prayer key for display (`"maghrib"` -> `"Maghrib"`).
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
