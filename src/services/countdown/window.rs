use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::prayer_times::{PrayerTimes, FAJR, ISHA, MAGHRIB};
use crate::services::schedule::ResolvedDay;
use crate::utils::date::add_days;

/// Interval during which a countdown runs.
///
/// Both bounds are exclusive: at exactly `start` or `target` the countdown
/// reads zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownWindow {
    pub start: NaiveDateTime,
    pub target: NaiveDateTime,
}

impl CountdownWindow {
    pub fn new(start: NaiveDateTime, target: NaiveDateTime) -> Self {
        Self { start, target }
    }

    pub fn contains(&self, now: NaiveDateTime) -> bool {
        now > self.start && now < self.target
    }

    /// Milliseconds until `target` while inside the window, else zero.
    pub fn remaining_ms(&self, now: NaiveDateTime) -> i64 {
        if self.contains(now) {
            (self.target - now).num_milliseconds()
        } else {
            0
        }
    }
}

fn at(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Fasting-day window from today's fajr to today's maghrib.
///
/// `None` unless the card shows the current date and both times parse.
pub fn maghrib_window(day: &ResolvedDay, times: Option<&PrayerTimes>) -> Option<CountdownWindow> {
    if !day.is_today() {
        return None;
    }
    let times = times?;
    let fajr = times.time_of(FAJR)?;
    let maghrib = times.time_of(MAGHRIB)?;
    Some(CountdownWindow::new(at(day.date, fajr), at(day.date, maghrib)))
}

/// Suhoor window from today's isha to the following day's fajr.
///
/// `None` unless the card shows the current date, today's isha parses and
/// the next day's fajr parses.
pub fn suhoor_window(
    day: &ResolvedDay,
    times: Option<&PrayerTimes>,
    next_day_times: Option<&PrayerTimes>,
) -> Option<CountdownWindow> {
    if !day.is_today() {
        return None;
    }
    let isha = times?.time_of(ISHA)?;
    let next_fajr = next_day_times?.time_of(FAJR)?;
    Some(CountdownWindow::new(
        at(day.date, isha),
        at(add_days(day.date, 1), next_fajr),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_selector::DaySelector;
    use chrono::Duration;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn today() -> ResolvedDay {
        ResolvedDay {
            selector: DaySelector::Today,
            date: date(),
            today: date(),
        }
    }

    fn times() -> PrayerTimes {
        PrayerTimes::new()
            .with(FAJR, "04:30")
            .with(MAGHRIB, "18:45")
            .with(ISHA, "19:00")
    }

    fn tomorrow_times() -> PrayerTimes {
        PrayerTimes::new().with(FAJR, "04:15")
    }

    fn on(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_maghrib_remaining_at_noon() {
        let window = maghrib_window(&today(), Some(&times())).unwrap();
        let now = on(date(), 12, 0);
        let expected = (Duration::hours(6) + Duration::minutes(45)).num_milliseconds();
        assert_eq!(window.remaining_ms(now), expected);
    }

    #[test]
    fn test_maghrib_zero_outside_window() {
        let window = maghrib_window(&today(), Some(&times())).unwrap();
        assert_eq!(window.remaining_ms(on(date(), 3, 0)), 0);
        assert_eq!(window.remaining_ms(on(date(), 4, 30)), 0);
        assert_eq!(window.remaining_ms(on(date(), 18, 45)), 0);
        assert_eq!(window.remaining_ms(on(date(), 21, 0)), 0);
    }

    #[test]
    fn test_maghrib_counts_subsecond_precision() {
        let window = maghrib_window(&today(), Some(&times())).unwrap();
        let now = on(date(), 18, 44) + Duration::milliseconds(59_250);
        assert_eq!(window.remaining_ms(now), 750);
    }

    #[test]
    fn test_maghrib_inactive_when_not_today() {
        let day = ResolvedDay {
            today: date() - Duration::days(1),
            ..today()
        };
        assert!(maghrib_window(&day, Some(&times())).is_none());
    }

    #[test]
    fn test_maghrib_inactive_when_time_missing_or_malformed() {
        let missing = PrayerTimes::new().with(MAGHRIB, "18:45");
        assert!(maghrib_window(&today(), Some(&missing)).is_none());

        let malformed = times().with(FAJR, "dawn");
        assert!(maghrib_window(&today(), Some(&malformed)).is_none());

        assert!(maghrib_window(&today(), None).is_none());
    }

    #[test]
    fn test_suhoor_remaining_late_evening() {
        let window = suhoor_window(&today(), Some(&times()), Some(&tomorrow_times())).unwrap();
        let now = on(date(), 23, 0);
        let expected = (Duration::hours(5) + Duration::minutes(15)).num_milliseconds();
        assert_eq!(window.remaining_ms(now), expected);
        assert_eq!(window.target, on(date() + Duration::days(1), 4, 15));
    }

    #[test]
    fn test_suhoor_after_midnight_still_counts() {
        let window = suhoor_window(&today(), Some(&times()), Some(&tomorrow_times())).unwrap();
        let now = on(date() + Duration::days(1), 3, 15);
        assert_eq!(window.remaining_ms(now), Duration::hours(1).num_milliseconds());
    }

    #[test]
    fn test_suhoor_zero_before_isha() {
        let window = suhoor_window(&today(), Some(&times()), Some(&tomorrow_times())).unwrap();
        assert_eq!(window.remaining_ms(on(date(), 18, 59)), 0);
    }

    #[test]
    fn test_suhoor_requires_next_day_fajr() {
        assert!(suhoor_window(&today(), Some(&times()), None).is_none());
        let no_fajr = PrayerTimes::new().with(ISHA, "19:00");
        assert!(suhoor_window(&today(), Some(&times()), Some(&no_fajr)).is_none());
    }
}
