//! Maghrib and suhoor countdowns for the current day.
//!
//! A [`DayCountdowns`] is owned by one schedule card. It derives the two
//! countdown windows from the card's inputs and keeps one
//! [`CountdownTicker`] per active window, replacing the tickers whenever the
//! windows change. Tickers are polled from the UI frame; there are no
//! background threads.

mod format;
mod ticker;
mod window;

use std::sync::Arc;
use std::time::Duration;

pub use format::format_remaining;
pub use ticker::{CountdownTicker, RepaintRequest};
pub use window::{maghrib_window, suhoor_window, CountdownWindow};

use crate::services::clock::Clock;
use crate::services::schedule::{ResolvedDay, ScheduleProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownKind {
    /// Fajr to maghrib on the current day
    Maghrib,
    /// Isha tonight to fajr tomorrow
    Suhoor,
}

impl CountdownKind {
    pub fn label(self) -> &'static str {
        match self {
            CountdownKind::Maghrib => "Time until Maghrib",
            CountdownKind::Suhoor => "Time until Fajr",
        }
    }
}

/// A running countdown and the window it was started for.
pub struct ActiveCountdown {
    kind: CountdownKind,
    window: CountdownWindow,
    ticker: CountdownTicker,
}

impl ActiveCountdown {
    pub fn kind(&self) -> CountdownKind {
        self.kind
    }

    pub fn window(&self) -> CountdownWindow {
        self.window
    }

    pub fn remaining_ms(&self) -> i64 {
        self.ticker.remaining_ms()
    }

    /// `"Time until Maghrib: 1h 30m"`, or `None` while the countdown reads zero.
    pub fn display_text(&self) -> Option<String> {
        let remaining = self.remaining_ms();
        (remaining > 0).then(|| format!("{}: {}", self.kind.label(), format_remaining(remaining)))
    }
}

/// Countdown state owned by a single schedule card.
pub struct DayCountdowns {
    clock: Arc<dyn Clock>,
    interval: Duration,
    request_repaint: RepaintRequest,
    windows: Option<(Option<CountdownWindow>, Option<CountdownWindow>)>,
    maghrib: Option<ActiveCountdown>,
    suhoor: Option<ActiveCountdown>,
}

impl DayCountdowns {
    pub fn new(clock: Arc<dyn Clock>, interval: Duration, request_repaint: RepaintRequest) -> Self {
        Self {
            clock,
            interval,
            request_repaint,
            windows: None,
            maghrib: None,
            suhoor: None,
        }
    }

    /// Bring the tickers in line with the card's current inputs, then let
    /// any ticker whose interval has elapsed recompute. Called once per frame.
    ///
    /// Tickers are kept as long as the derived windows are unchanged; any
    /// change drops the old tickers before starting new ones.
    pub fn sync(&mut self, day: &ResolvedDay, props: &ScheduleProps) {
        let maghrib = maghrib_window(day, props.prayer_times.as_ref());
        let suhoor = suhoor_window(
            day,
            props.prayer_times.as_ref(),
            props.next_day_prayer_times.as_ref(),
        );

        if self.windows == Some((maghrib, suhoor)) {
            for countdown in self.maghrib.iter_mut().chain(self.suhoor.iter_mut()) {
                countdown.ticker.poll();
            }
            return;
        }

        log::debug!(
            "Countdown windows for {} changed: maghrib={:?} suhoor={:?}",
            day.date,
            maghrib,
            suhoor
        );
        self.stop();
        self.maghrib = maghrib.map(|w| self.launch(CountdownKind::Maghrib, w));
        self.suhoor = suhoor.map(|w| self.launch(CountdownKind::Suhoor, w));
        self.windows = Some((maghrib, suhoor));
    }

    /// Release both tickers. The next [`sync`](Self::sync) starts afresh.
    pub fn stop(&mut self) {
        self.maghrib = None;
        self.suhoor = None;
        self.windows = None;
    }

    pub fn maghrib(&self) -> Option<&ActiveCountdown> {
        self.maghrib.as_ref()
    }

    pub fn suhoor(&self) -> Option<&ActiveCountdown> {
        self.suhoor.as_ref()
    }

    /// Active countdowns in display order.
    pub fn active(&self) -> impl Iterator<Item = &ActiveCountdown> {
        self.maghrib.iter().chain(self.suhoor.iter())
    }

    fn launch(&self, kind: CountdownKind, window: CountdownWindow) -> ActiveCountdown {
        ActiveCountdown {
            kind,
            window,
            ticker: CountdownTicker::start(
                window,
                Arc::clone(&self.clock),
                self.interval,
                Arc::clone(&self.request_repaint),
            ),
        }
    }
}
