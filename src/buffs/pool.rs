//! Independently timed multiplicative buffs sharing one countdown tick.

use super::types::{Buff, BuffSnapshot, ConsumableKind};
use crate::core::tick::Ticker;
use log::debug;
use std::collections::BTreeMap;
use std::time::Duration;

/// At most one entry per kind. Ordered so the product is reproducible.
#[derive(Debug, Clone)]
pub struct BuffPool {
    entries: BTreeMap<ConsumableKind, Buff>,
    ticker: Ticker,
}

impl BuffPool {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            entries: BTreeMap::new(),
            ticker: Ticker::new(tick_interval),
        }
    }

    /// Insert or overwrite the buff for `kind` and make sure the tick runs.
    /// A zero duration expires immediately and is not inserted.
    pub fn activate(&mut self, kind: ConsumableKind, duration_seconds: u32, multiplier: f64) {
        if duration_seconds == 0 {
            return;
        }
        self.entries.insert(
            kind,
            Buff {
                kind,
                remaining_seconds: duration_seconds,
                multiplier,
            },
        );
        self.ticker.start();
    }

    pub fn combined_multiplier(&self) -> f64 {
        self.entries.values().map(|b| b.multiplier).product()
    }

    pub fn remaining(&self, kind: ConsumableKind) -> Option<u32> {
        self.entries.get(&kind).map(|b| b.remaining_seconds)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn snapshot(&self) -> BuffSnapshot {
        BuffSnapshot {
            active: self.entries.values().copied().collect(),
            combined_multiplier: self.combined_multiplier(),
        }
    }

    pub fn pause(&mut self) {
        self.ticker.pause();
    }

    pub fn resume(&mut self) {
        self.ticker.resume();
    }

    /// Drop every buff and halt the tick.
    pub fn stop(&mut self) {
        self.entries.clear();
        self.ticker.stop();
    }

    /// Run the countdown ticks inside `dt`. Returns kinds that expired.
    pub fn advance(&mut self, dt: Duration) -> Vec<ConsumableKind> {
        let ticks = self.ticker.advance(dt);
        let mut expired = Vec::new();
        for _ in 0..ticks {
            expired.extend(self.tick());
            if self.entries.is_empty() {
                self.ticker.stop();
                break;
            }
        }
        expired
    }

    fn tick(&mut self) -> Vec<ConsumableKind> {
        for buff in self.entries.values_mut() {
            buff.remaining_seconds = buff.remaining_seconds.saturating_sub(1);
        }
        let expired: Vec<ConsumableKind> = self
            .entries
            .values()
            .filter(|b| b.remaining_seconds == 0)
            .map(|b| b.kind)
            .collect();
        for kind in &expired {
            debug!("buff expired: {}", kind.name());
            self.entries.remove(kind);
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> BuffPool {
        BuffPool::new(Duration::from_secs(1))
    }

    #[test]
    fn test_empty_pool_multiplier_is_one() {
        assert_eq!(pool().combined_multiplier(), 1.0);
    }

    #[test]
    fn test_multipliers_combine_multiplicatively() {
        let mut p = pool();
        p.activate(ConsumableKind::Coffee, 10, 1.5);
        p.activate(ConsumableKind::EnergyDrink, 10, 2.0);
        assert_eq!(p.combined_multiplier(), 3.0);
    }

    #[test]
    fn test_same_kind_overwrites() {
        let mut p = pool();
        p.activate(ConsumableKind::Coffee, 10, 1.5);
        p.activate(ConsumableKind::Coffee, 3, 1.2);
        assert_eq!(p.len(), 1);
        assert_eq!(p.remaining(ConsumableKind::Coffee), Some(3));
        assert_eq!(p.combined_multiplier(), 1.2);
    }

    #[test]
    fn test_entries_expire_independently() {
        let mut p = pool();
        p.activate(ConsumableKind::Coffee, 2, 1.5);
        p.activate(ConsumableKind::GoldenApple, 5, 3.0);
        let expired = p.advance(Duration::from_secs(2));
        assert_eq!(expired, vec![ConsumableKind::Coffee]);
        assert_eq!(p.combined_multiplier(), 3.0);
        assert_eq!(p.remaining(ConsumableKind::GoldenApple), Some(3));
    }

    #[test]
    fn test_tick_self_cancels_when_empty() {
        let mut p = pool();
        p.activate(ConsumableKind::Coffee, 1, 1.5);
        p.advance(Duration::from_secs(3));
        assert!(p.is_empty());
        assert!(!p.is_ticking());
    }

    #[test]
    fn test_pause_keeps_remaining_time() {
        let mut p = pool();
        p.activate(ConsumableKind::LuckyClover, 4, 1.3);
        p.advance(Duration::from_millis(1_500));
        p.pause();
        p.advance(Duration::from_secs(600));
        assert_eq!(p.remaining(ConsumableKind::LuckyClover), Some(3));
        p.resume();
        p.advance(Duration::from_millis(500));
        assert_eq!(p.remaining(ConsumableKind::LuckyClover), Some(2));
    }

    #[test]
    fn test_activate_while_paused_stays_paused() {
        let mut p = pool();
        p.pause();
        p.activate(ConsumableKind::Coffee, 5, 1.5);
        p.advance(Duration::from_secs(5));
        assert_eq!(p.remaining(ConsumableKind::Coffee), Some(5));
    }

    #[test]
    fn test_stop_clears_everything() {
        let mut p = pool();
        p.activate(ConsumableKind::Coffee, 5, 1.5);
        p.stop();
        assert!(p.is_empty());
        assert!(!p.is_ticking());
        assert_eq!(p.combined_multiplier(), 1.0);
    }

    #[test]
    fn test_zero_duration_not_inserted() {
        let mut p = pool();
        p.activate(ConsumableKind::Coffee, 0, 9.0);
        assert!(p.is_empty());
    }
}
