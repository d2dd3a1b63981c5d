//! Discrete-tick scheduler.
//!
//! Every repeating timer in the engine (fever decay, buff decay, play time,
//! idle income) is a [`Ticker`] driven by `advance`. Nothing here reads the
//! wall clock, so tests step simulated time exactly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A repeating timer that fires once per `interval` of advanced time.
///
/// Sub-interval progress is carried between calls. While paused, `advance`
/// is a no-op and the carried progress is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
    running: bool,
    paused: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        // A zero interval would fire unboundedly on any advance.
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: false,
            paused: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking. Calling this on a running ticker changes nothing.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop ticking and drop any partial interval. Safe when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True when a call to `advance` could produce ticks.
    pub fn is_active(&self) -> bool {
        self.running && !self.paused
    }

    /// Partial progress towards the next tick.
    pub fn pending(&self) -> Duration {
        self.elapsed
    }

    /// Advance simulated time and return how many whole intervals elapsed.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if !self.is_active() {
            return 0;
        }
        let total = self.elapsed.as_nanos() + dt.as_nanos();
        let interval = self.interval.as_nanos();
        // The remainder is below `interval`, which itself fits a Duration.
        self.elapsed = Duration::from_nanos((total % interval) as u64);
        u64::try_from(total / interval).unwrap_or(u64::MAX)
    }
}
