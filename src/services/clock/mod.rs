//! Wall-clock source for date resolution and countdowns.
//!
//! Everything downstream works on naive wall-clock datetimes in the
//! timetable's zone, so the clock is the single place where a time zone is
//! applied.

use std::sync::Mutex;

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock, optionally converted into a fixed IANA zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Option<Tz>,
}

impl SystemClock {
    pub fn new(timezone: Option<Tz>) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}

/// A clock pinned to a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
