// Property-based tests for date resolution, Hijri conversion and countdowns

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use prayer_schedule::models::day_selector::DaySelector;
use prayer_schedule::models::prayer_times::PrayerTimes;
use prayer_schedule::services::countdown::{format_remaining, maghrib_window};
use prayer_schedule::services::hijri::{days_in_month, HijriDate};
use prayer_schedule::services::schedule::{resolve_date, ResolvedDay};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 ..= 2199-12-31
    (693_596i32..=803_168).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
}

fn selector() -> impl Strategy<Value = DaySelector> {
    prop_oneof![
        Just(DaySelector::Today),
        Just(DaySelector::Tomorrow),
        Just(DaySelector::DayAfterTomorrow),
    ]
}

proptest! {
    /// Property: the resolved date is always the base plus the selector offset
    #[test]
    fn prop_resolved_date_is_base_plus_offset(base in any_date(), today in any_date(), day in selector()) {
        let resolved = resolve_date(day, Some(base), None, today);
        prop_assert_eq!(resolved - base, Duration::days(day.offset_days()));
    }

    /// Property: Gregorian -> Hijri -> Gregorian is the identity
    #[test]
    fn prop_hijri_round_trip(date in any_date()) {
        let hijri = HijriDate::from_gregorian(date);
        prop_assert!(hijri.day() >= 1 && hijri.day() <= days_in_month(hijri.year(), hijri.month()));
        prop_assert_eq!(hijri.to_gregorian(), Some(date));
    }

    /// Property: consecutive Gregorian days advance the Hijri date by exactly one day
    #[test]
    fn prop_hijri_days_are_consecutive(date in any_date()) {
        let today = HijriDate::from_gregorian(date);
        let tomorrow = HijriDate::from_gregorian(date + Duration::days(1));
        let expected = if today.day() < days_in_month(today.year(), today.month()) {
            HijriDate::new(today.year(), today.month(), today.day() + 1)
        } else if today.month() < 12 {
            HijriDate::new(today.year(), today.month() + 1, 1)
        } else {
            HijriDate::new(today.year() + 1, 1, 1)
        };
        prop_assert_eq!(Some(tomorrow), expected);
    }

    /// Property: inside the fasting window the countdown equals the time left to maghrib
    #[test]
    fn prop_maghrib_countdown_matches_difference(
        fajr_minute in 180u32..420,
        maghrib_minute in 960u32..1260,
        now_second in 0u32..86_400,
    ) {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let hhmm = |m: u32| format!("{:02}:{:02}", m / 60, m % 60);
        let times = PrayerTimes::new()
            .with("fajr", hhmm(fajr_minute))
            .with("maghrib", hhmm(maghrib_minute));
        let day = ResolvedDay { selector: DaySelector::Today, date, today: date };
        let window = maghrib_window(&day, Some(&times)).unwrap();

        let now = date.and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(now_second as i64);
        let remaining = window.remaining_ms(now);

        if now_second > fajr_minute * 60 && now_second < maghrib_minute * 60 {
            prop_assert_eq!(remaining, (maghrib_minute * 60 - now_second) as i64 * 1000);
        } else {
            prop_assert_eq!(remaining, 0);
        }
    }

    /// Property: the formatted countdown never overstates the remaining time
    #[test]
    fn prop_format_remaining_floors(ms in 0i64..(48 * 3_600_000)) {
        let text = format_remaining(ms);
        if ms < 60_000 {
            prop_assert_eq!(text, format!("{}s", ms / 1000));
        } else {
            let (h, m) = text.trim_end_matches('m').split_once("h ").unwrap();
            let shown = h.parse::<i64>().unwrap() * 3_600_000 + m.parse::<i64>().unwrap() * 60_000;
            prop_assert!(shown <= ms && ms - shown < 60_000);
        }
    }
}
