//! Date resolution and header text for a day schedule card.
//!
//! All functions here are pure: given the card's inputs and the current date
//! they derive what the card shows, so nothing needs to be cached between
//! frames.

use chrono::NaiveDate;

use crate::models::day_selector::DaySelector;
use crate::models::prayer_times::PrayerTimes;
use crate::services::hijri::hijri_for;
use crate::utils::date::add_days;

/// Inputs a schedule card is rendered from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScheduleProps {
    pub day: DaySelector,
    pub prayer_times: Option<PrayerTimes>,
    /// Overrides the configured default base date for this card.
    pub base_date: Option<NaiveDate>,
    /// Following day's times; needed for the suhoor window across midnight.
    pub next_day_prayer_times: Option<PrayerTimes>,
}

/// A card's resolved date relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDay {
    pub selector: DaySelector,
    pub date: NaiveDate,
    pub today: NaiveDate,
}

impl ResolvedDay {
    pub fn is_today(&self) -> bool {
        self.date == self.today
    }

    /// `"Today, "` or `"Tomorrow, "` when the label matches the calendar.
    pub fn prefix(&self) -> &'static str {
        match self.selector {
            DaySelector::Today if self.is_today() => "Today, ",
            DaySelector::Tomorrow if self.date == add_days(self.today, 1) => "Tomorrow, ",
            _ => "",
        }
    }

    /// `"Today, October 16, 2026"`
    pub fn header(&self) -> String {
        format!("{}{}", self.prefix(), format_long_date(self.date))
    }

    /// `"Friday, 4 Jumada I 1448 AH"`
    pub fn subheader(&self, hijri_adjustment_days: i64) -> String {
        format!(
            "{}, {}",
            self.date.format("%A"),
            hijri_for(self.date, hijri_adjustment_days)
        )
    }
}

/// Date a card displays: base date (override, else configured default, else
/// today) shifted by the selector's offset.
pub fn resolve_date(
    day: DaySelector,
    base_override: Option<NaiveDate>,
    configured_base: Option<NaiveDate>,
    today: NaiveDate,
) -> NaiveDate {
    let base = base_override.or(configured_base).unwrap_or(today);
    add_days(base, day.offset_days())
}

pub fn resolve_day(
    props: &ScheduleProps,
    configured_base: Option<NaiveDate>,
    today: NaiveDate,
) -> ResolvedDay {
    ResolvedDay {
        selector: props.day,
        date: resolve_date(props.day, props.base_date, configured_base, today),
        today,
    }
}

/// `"October 16, 2026"`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
