//! Tunable economy configuration.
//!
//! Defaults mirror the constants in [`super::balance`]. A JSON override file
//! can replace any part of it for balance experiments.

use super::balance::*;
use crate::activity::ActivityKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Fever behaviour for one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeverConfig {
    /// Multiplier per tier (0..=3).
    pub multipliers: [f64; 4],
    pub decay_interval_ms: u64,
    /// Share of the fever ceiling removed per decay tick.
    pub decay_percent: f64,
}

impl FeverConfig {
    pub fn decay_interval(&self) -> Duration {
        Duration::from_millis(self.decay_interval_ms)
    }

    /// Absolute fever points removed by one decay tick.
    pub fn decay_per_tick(&self) -> f64 {
        (MAX_FEVER * self.decay_percent / 100.0).max(0.0)
    }
}

impl Default for FeverConfig {
    fn default() -> Self {
        Self {
            multipliers: CALM_FEVER_MULTIPLIERS,
            decay_interval_ms: FEVER_DECAY_INTERVAL_MS,
            decay_percent: FEVER_DECAY_PERCENT,
        }
    }
}

/// Reward and fever numbers for one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityBalance {
    pub fever: FeverConfig,
    pub base_yield: u64,
    pub fever_gain: f64,
    pub fever_penalty: f64,
    pub large_multiplier: f64,
    pub small_multiplier: f64,
    pub penalty_fraction: f64,
}

impl ActivityBalance {
    pub fn for_activity(activity: ActivityKind) -> Self {
        let i = activity.index();
        let multipliers = match activity {
            ActivityKind::Tap | ActivityKind::Stacking => CALM_FEVER_MULTIPLIERS,
            ActivityKind::Dodge | ActivityKind::Language => FRENZY_FEVER_MULTIPLIERS,
        };
        Self {
            fever: FeverConfig {
                multipliers,
                ..FeverConfig::default()
            },
            base_yield: ACTIVITY_BASE_YIELD[i],
            fever_gain: ACTIVITY_FEVER_GAIN[i],
            fever_penalty: ACTIVITY_FEVER_PENALTY[i],
            large_multiplier: ACTIVITY_LARGE_MULTIPLIER[i],
            small_multiplier: ACTIVITY_SMALL_MULTIPLIER[i],
            penalty_fraction: ACTIVITY_PENALTY_FRACTION[i],
        }
    }
}

/// Whole-engine configuration, injected into [`crate::engine::Engine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Indexed by `ActivityKind::index`.
    pub activities: [ActivityBalance; 4],
    pub buff_tick_interval_ms: u64,
    pub idle_income_interval_ms: u64,
    pub play_time_interval_ms: u64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            activities: ActivityKind::ALL.map(ActivityBalance::for_activity),
            buff_tick_interval_ms: BUFF_TICK_INTERVAL_MS,
            idle_income_interval_ms: IDLE_INCOME_INTERVAL_MS,
            play_time_interval_ms: PLAY_TIME_INTERVAL_MS,
        }
    }
}

impl EconomyConfig {
    pub fn activity(&self, activity: ActivityKind) -> &ActivityBalance {
        &self.activities[activity.index()]
    }

    pub fn buff_tick_interval(&self) -> Duration {
        Duration::from_millis(self.buff_tick_interval_ms)
    }

    pub fn idle_income_interval(&self) -> Duration {
        Duration::from_millis(self.idle_income_interval_ms)
    }

    pub fn play_time_interval(&self) -> Duration {
        Duration::from_millis(self.play_time_interval_ms)
    }

    pub fn from_json(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load a balance override file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_picks_table_per_activity() {
        let config = EconomyConfig::default();
        assert_eq!(
            config.activity(ActivityKind::Tap).fever.multipliers,
            CALM_FEVER_MULTIPLIERS
        );
        assert_eq!(
            config.activity(ActivityKind::Dodge).fever.multipliers,
            FRENZY_FEVER_MULTIPLIERS
        );
        assert_eq!(config.activity(ActivityKind::Language).base_yield, 10);
    }

    #[test]
    fn test_decay_per_tick_from_percent() {
        let fever = FeverConfig {
            decay_percent: 2.5,
            ..FeverConfig::default()
        };
        assert!((fever.decay_per_tick() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_override_roundtrip() {
        let mut config = EconomyConfig::default();
        config.idle_income_interval_ms = 5_000;
        let json = serde_json::to_string(&config).unwrap();
        let loaded = EconomyConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.idle_income_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_bad_json_is_invalid_data() {
        let err = EconomyConfig::from_json("{ nope").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
