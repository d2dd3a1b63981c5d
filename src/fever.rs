//! Fever meter: a decaying engagement scalar with four multiplier tiers.
//!
//! The tier is never stored. It is derived from the value on every read, so
//! it cannot drift from the thresholds.

use crate::core::balance::{FEVER_TIER_THRESHOLDS, MAX_FEVER};
use crate::core::config::FeverConfig;
use crate::core::tick::Ticker;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tier for a fever value: [0,100)→0, [100,200)→1, [200,300)→2, [300,400]→3.
pub fn fever_tier(value: f64) -> u8 {
    FEVER_TIER_THRESHOLDS
        .iter()
        .rposition(|&threshold| value >= threshold)
        .unwrap_or(0) as u8
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeverSnapshot {
    pub value: f64,
    pub tier: u8,
    pub multiplier: f64,
}

#[derive(Debug, Clone)]
pub struct FeverMeter {
    value: f64,
    config: FeverConfig,
    decay: Ticker,
}

impl FeverMeter {
    pub fn new(config: FeverConfig) -> Self {
        let decay = Ticker::new(config.decay_interval());
        Self {
            value: 0.0,
            config,
            decay,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn tier(&self) -> u8 {
        fever_tier(self.value)
    }

    pub fn multiplier(&self) -> f64 {
        self.config.multipliers[self.tier() as usize]
    }

    pub fn snapshot(&self) -> FeverSnapshot {
        FeverSnapshot {
            value: self.value,
            tier: self.tier(),
            multiplier: self.multiplier(),
        }
    }

    /// Add fever (negative for a penalty), clamped into `[0, MAX_FEVER]`.
    pub fn gain(&mut self, amount: f64) {
        if !amount.is_finite() {
            return;
        }
        self.value = (self.value + amount).clamp(0.0, MAX_FEVER);
    }

    /// Back to zero with decay stopped. Called at activity start.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.decay.stop();
    }

    pub fn start_decay(&mut self) {
        self.decay.start();
    }

    pub fn stop_decay(&mut self) {
        self.decay.stop();
    }

    pub fn pause(&mut self) {
        self.decay.pause();
    }

    pub fn resume(&mut self) {
        self.decay.resume();
    }

    pub fn is_decaying(&self) -> bool {
        self.decay.is_active()
    }

    /// Run the decay ticks that fall inside `dt`. Returns how many ran.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        let ticks = self.decay.advance(dt);
        if ticks > 0 {
            self.decay_ticks(ticks);
        }
        ticks
    }

    fn decay_ticks(&mut self, ticks: u64) {
        let loss = self.config.decay_per_tick() * ticks as f64;
        self.value = (self.value - loss).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> FeverMeter {
        FeverMeter::new(FeverConfig::default())
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(fever_tier(0.0), 0);
        assert_eq!(fever_tier(99.9), 0);
        assert_eq!(fever_tier(100.0), 1);
        assert_eq!(fever_tier(199.99), 1);
        assert_eq!(fever_tier(200.0), 2);
        assert_eq!(fever_tier(300.0), 3);
        assert_eq!(fever_tier(400.0), 3);
    }

    #[test]
    fn test_gain_then_penalty_clamps_to_zero() {
        let mut fever = meter();
        fever.gain(150.0);
        assert_eq!(fever.value(), 150.0);
        assert_eq!(fever.tier(), 1);
        fever.gain(-200.0);
        assert_eq!(fever.value(), 0.0);
        assert_eq!(fever.tier(), 0);
    }

    #[test]
    fn test_gain_at_ceiling_is_noop() {
        let mut fever = meter();
        fever.gain(1_000.0);
        assert_eq!(fever.value(), MAX_FEVER);
        fever.gain(10.0);
        assert_eq!(fever.value(), MAX_FEVER);
        assert_eq!(fever.tier(), 3);
    }

    #[test]
    fn test_non_finite_gain_ignored() {
        let mut fever = meter();
        fever.gain(50.0);
        fever.gain(f64::NAN);
        fever.gain(f64::INFINITY);
        assert_eq!(fever.value(), 50.0);
    }

    #[test]
    fn test_decay_is_linear_and_floored() {
        let mut fever = meter();
        fever.gain(20.0);
        fever.start_decay();
        // default: 4 points every 200ms
        assert_eq!(fever.advance(Duration::from_millis(400)), 2);
        assert_eq!(fever.value(), 12.0);
        fever.advance(Duration::from_secs(10));
        assert_eq!(fever.value(), 0.0);
    }

    #[test]
    fn test_no_decay_until_started() {
        let mut fever = meter();
        fever.gain(100.0);
        assert_eq!(fever.advance(Duration::from_secs(5)), 0);
        assert_eq!(fever.value(), 100.0);
    }

    #[test]
    fn test_start_decay_twice_keeps_single_rate() {
        let mut fever = meter();
        fever.gain(100.0);
        fever.start_decay();
        fever.start_decay();
        fever.advance(Duration::from_millis(200));
        assert_eq!(fever.value(), 96.0);
    }

    #[test]
    fn test_stop_decay_when_not_running() {
        let mut fever = meter();
        fever.stop_decay();
        assert!(!fever.is_decaying());
    }

    #[test]
    fn test_pause_preserves_partial_tick() {
        let mut fever = meter();
        fever.gain(100.0);
        fever.start_decay();
        fever.advance(Duration::from_millis(150));
        fever.pause();
        fever.advance(Duration::from_secs(60));
        assert_eq!(fever.value(), 100.0);
        fever.resume();
        fever.advance(Duration::from_millis(50));
        assert_eq!(fever.value(), 96.0);
    }

    #[test]
    fn test_snapshot_uses_activity_table() {
        let mut fever = FeverMeter::new(FeverConfig {
            multipliers: [1.0, 1.5, 2.5, 5.0],
            ..FeverConfig::default()
        });
        fever.gain(310.0);
        let snap = fever.snapshot();
        assert_eq!(snap.tier, 3);
        assert_eq!(snap.multiplier, 5.0);
    }
}
