// Date utility functions
// Clock-string parsing and day boundaries shared by services and views

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a timetable clock string such as `"04:30"` or `"4:30"`.
///
/// A valid trailing seconds component (`"04:30:00"`) is accepted and ignored.
/// Returns `None` for anything that is not a valid hour/minute pair.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let mut parts = value.trim().split(':');
    let hour = clock_field(parts.next()?)?;
    let minute = clock_field(parts.next()?)?;
    if let Some(seconds) = parts.next() {
        if clock_field(seconds)? > 59 {
            return None;
        }
    }
    if parts.next().is_some() {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// One or two ASCII digits. Signs and inner whitespace are rejected.
fn clock_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::seconds(1)
}

/// Shift `date` by whole days, saturating at the calendar limits.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}
