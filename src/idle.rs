//! Idle income: a repeating timer paying passive yield.

use crate::core::tick::Ticker;
use std::time::Duration;

/// Result of advancing the idle timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdlePayout {
    pub gold: u64,
    pub seconds: u64,
}

/// Sub-second intervals pay fractional gold and seconds; both fractions are
/// carried so that many short ticks add up to the same as one long one.
#[derive(Debug, Clone)]
pub struct IdleIncome {
    ticker: Ticker,
    /// Elapsed milliseconds not yet reported as a whole second.
    carry_ms: u64,
    /// Gold earned in thousandths, not yet paid as a whole coin.
    carry_milligold: u64,
}

impl IdleIncome {
    pub fn new(interval: Duration) -> Self {
        Self {
            ticker: Ticker::new(interval),
            carry_ms: 0,
            carry_milligold: 0,
        }
    }

    pub fn start(&mut self) {
        self.ticker.start();
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
        self.carry_ms = 0;
        self.carry_milligold = 0;
    }

    pub fn pause(&mut self) {
        self.ticker.pause();
    }

    pub fn resume(&mut self) {
        self.ticker.resume();
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_active()
    }

    /// Advance the timer and compute what the elapsed ticks pay at
    /// `yield_per_second`. Crediting is left to the caller.
    pub fn advance(&mut self, dt: Duration, yield_per_second: u64) -> IdlePayout {
        let ticks = self.ticker.advance(dt);
        if ticks == 0 {
            return IdlePayout::default();
        }
        let interval_ms = self.ticker.interval().as_millis() as u64;
        let millis = ticks.saturating_mul(interval_ms);

        let total_ms = self.carry_ms.saturating_add(millis);
        self.carry_ms = total_ms % 1000;

        let milligold = yield_per_second
            .saturating_mul(millis)
            .saturating_add(self.carry_milligold);
        self.carry_milligold = milligold % 1000;

        IdlePayout {
            gold: milligold / 1000,
            seconds: total_ms / 1000,
        }
    }
}
