use std::sync::Arc;
use std::time::{Duration, Instant};

use super::window::CountdownWindow;
use crate::services::clock::Clock;

/// Asks the UI to run another frame after the given delay.
pub type RepaintRequest = Arc<dyn Fn(Duration) + Send + Sync>;

/// Recomputes a countdown at most once per interval, driven by UI frames.
///
/// The first value is computed in [`CountdownTicker::start`]. Each recompute
/// schedules the next repaint, so the countdown keeps moving while nothing
/// else redraws. Once the ticker is dropped no further repaint is requested.
pub struct CountdownTicker {
    window: CountdownWindow,
    clock: Arc<dyn Clock>,
    interval: Duration,
    remaining: i64,
    next_tick: Instant,
    request_repaint: RepaintRequest,
}

impl CountdownTicker {
    pub fn start(
        window: CountdownWindow,
        clock: Arc<dyn Clock>,
        interval: Duration,
        request_repaint: RepaintRequest,
    ) -> Self {
        let remaining = window.remaining_ms(clock.now());
        request_repaint(interval);
        Self {
            window,
            clock,
            interval,
            remaining,
            next_tick: Instant::now() + interval,
            request_repaint,
        }
    }

    /// Recompute if the interval has elapsed. Returns whether a tick ran.
    pub fn poll(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next_tick {
            return false;
        }

        self.remaining = self.window.remaining_ms(self.clock.now());
        self.next_tick = now + self.interval;
        (self.request_repaint)(self.interval);
        true
    }

    /// Most recently computed value in milliseconds.
    pub fn remaining_ms(&self) -> i64 {
        self.remaining
    }
}
