//! Arithmetic Hijri calendar.
//!
//! Uses the tabular civil Islamic calendar: months alternate 30/29 days,
//! Dhuʻl-Hijjah gains a day in the 11 leap years of each 30-year cycle, and
//! 1 Muharram 1 AH falls on Julian Day Number 1948440 (16 July 622, Julian).
//! Observed-moon calendars can differ by a day or two, which is what the
//! adjustment in [`hijri_for`] is for.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::utils::date::add_days;

const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;
/// `NaiveDate::num_days_from_ce` is 1 for 0001-01-01, which is JDN 1721426.
const CE_TO_JDN: i64 = 1_721_425;

pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiʻ I",
    "Rabiʻ II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Shaʻban",
    "Ramadan",
    "Shawwal",
    "Dhuʻl-Qiʻdah",
    "Dhuʻl-Hijjah",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: i64,
    /// 1-based month
    month: u32,
    /// 1-based day of month
    day: u32,
}

impl HijriDate {
    /// Build a date, checking the day against the month's length.
    pub fn new(year: i64, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn from_gregorian(date: NaiveDate) -> Self {
        from_jdn(date.num_days_from_ce() as i64 + CE_TO_JDN)
    }

    pub fn to_gregorian(self) -> Option<NaiveDate> {
        let days = to_jdn(self.year, self.month, self.day) - CE_TO_JDN;
        i32::try_from(days)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

/// Hijri date for `date`, shifted by `adjustment_days`.
pub fn hijri_for(date: NaiveDate, adjustment_days: i64) -> HijriDate {
    HijriDate::from_gregorian(add_days(date, adjustment_days))
}

pub fn is_leap_year(year: i64) -> bool {
    (14 + 11 * year).rem_euclid(30) < 11
}

pub fn days_in_month(year: i64, month: u32) -> u32 {
    if month == 12 && is_leap_year(year) {
        30
    } else if month % 2 == 1 {
        30
    } else {
        29
    }
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    -(-numerator).div_euclid(denominator)
}

fn to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let month = month as i64;
    day as i64
        + ceil_div(59 * (month - 1), 2)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH_JDN
        - 1
}

fn from_jdn(jdn: i64) -> HijriDate {
    let year = (30 * (jdn - ISLAMIC_EPOCH_JDN) + 10646).div_euclid(10631);
    let elapsed = jdn - (29 + to_jdn(year, 1, 1));
    let month = (ceil_div(2 * elapsed, 59) + 1).clamp(1, 12) as u32;
    let day = (jdn - to_jdn(year, month, 1) + 1) as u32;
    HijriDate { year, month, day }
}
