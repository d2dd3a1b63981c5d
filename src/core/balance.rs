//! Shared balance constants used by both the engine and the simulator.
//!
//! All core balance numbers should be defined here.
//! Change once, test everywhere.

use crate::activity::ActivityKind;
use crate::buffs::ConsumableKind;
use crate::upgrades::EquipmentKind;
use crate::wallet::Cost;

// =============================================================================
// FEVER
// =============================================================================

/// Fever ceiling. The meter clamps into `[0, MAX_FEVER]`.
pub const MAX_FEVER: f64 = 400.0;

/// Lower bound of each fever tier (tier index = position).
pub const FEVER_TIER_THRESHOLDS: [f64; 4] = [0.0, 100.0, 200.0, 300.0];

/// Top fever tier. Entering it from below is a milestone.
pub const MAX_FEVER_TIER: u8 = 3;

/// Fever decay tick interval.
pub const FEVER_DECAY_INTERVAL_MS: u64 = 200;

/// Share of `MAX_FEVER` lost per decay tick (1% = 4 points every 200ms).
pub const FEVER_DECAY_PERCENT: f64 = 1.0;

/// Fever multipliers for the relaxed activities (tap, stacking).
pub const CALM_FEVER_MULTIPLIERS: [f64; 4] = [1.0, 1.2, 1.5, 2.0];

/// Fever multipliers for the reflex activities (dodge, language).
pub const FRENZY_FEVER_MULTIPLIERS: [f64; 4] = [1.0, 1.5, 2.5, 5.0];

// =============================================================================
// TIMERS
// =============================================================================

/// Buff countdown granularity.
pub const BUFF_TICK_INTERVAL_MS: u64 = 1000;

/// Idle income payout interval.
pub const IDLE_INCOME_INTERVAL_MS: u64 = 1000;

/// Play time is logged to the ledger in whole seconds.
pub const PLAY_TIME_INTERVAL_MS: u64 = 1000;

// =============================================================================
// ACTIVITIES
// =============================================================================

/// Gold per action before skills, indexed by `ActivityKind::index`.
pub const ACTIVITY_BASE_YIELD: [u64; 4] = [1, 5, 8, 10];

/// Fever gained per successful action.
pub const ACTIVITY_FEVER_GAIN: [f64; 4] = [4.0, 12.0, 15.0, 20.0];

/// Fever change on a failed action (negative).
pub const ACTIVITY_FEVER_PENALTY: [f64; 4] = [0.0, -40.0, -60.0, -50.0];

/// Multiplier for "large" outcomes (gold bar, golden block).
pub const ACTIVITY_LARGE_MULTIPLIER: [f64; 4] = [1.0, 3.0, 2.5, 1.0];

/// Multiplier for "small" outcomes (coin).
pub const ACTIVITY_SMALL_MULTIPLIER: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

/// Loss on a penalty outcome, as a fraction of the positive reward.
pub const ACTIVITY_PENALTY_FRACTION: [f64; 4] = [0.0, 0.5, 0.3, 0.25];

// =============================================================================
// SKILLS
// =============================================================================

pub const SKILL_TIERS: u8 = 3;
pub const MAX_SKILL_LEVEL: u32 = 50;

/// Level the previous tier needs before the next tier opens.
pub const SKILL_UNLOCK_LEVEL: u32 = 10;

/// Gold per level, `[activity][tier]`.
pub const SKILL_GOLD_PER_LEVEL: [[u64; 3]; 4] = [
    [1, 5, 25],  // Tap
    [3, 12, 50], // Dodge
    [4, 15, 60], // Stacking
    [5, 20, 80], // Language
];

/// Cost multiplier per level, `[activity][tier]`. Cost of the next level is
/// `cost_per_level * (level + 1)`.
pub const SKILL_COST_PER_LEVEL: [[u64; 3]; 4] = [
    [10, 120, 1_500],
    [25, 300, 3_500],
    [30, 350, 4_000],
    [40, 450, 5_000],
];

pub fn skill_gold_per_level(activity: ActivityKind, tier: u8) -> u64 {
    SKILL_GOLD_PER_LEVEL[activity.index()]
        .get(tier as usize)
        .copied()
        .unwrap_or(0)
}

pub fn skill_level_cost(activity: ActivityKind, tier: u8, current_level: u32) -> u64 {
    let per_level = SKILL_COST_PER_LEVEL[activity.index()]
        .get(tier as usize)
        .copied()
        .unwrap_or(0);
    per_level.saturating_mul(current_level as u64 + 1)
}

// =============================================================================
// EQUIPMENT
// =============================================================================

pub const MAX_EQUIPMENT_TIER: u8 = 5;

/// Passive gold per second, `[kind][tier]`.
pub const EQUIPMENT_PASSIVE_YIELD: [[u64; 6]; 4] = [
    [1, 3, 8, 20, 50, 120],  // Gloves
    [1, 4, 10, 25, 60, 150], // Shoes
    [2, 5, 12, 30, 75, 180], // Headband
    [3, 8, 20, 50, 120, 300], // Watch
];

/// Gold to attempt tier `t -> t + 1`, before the kind factor.
pub const EQUIPMENT_UPGRADE_GOLD: [u64; 5] = [500, 2_500, 10_000, 40_000, 150_000];

/// Gems to attempt tier `t -> t + 1`.
pub const EQUIPMENT_UPGRADE_GEMS: [u64; 5] = [0, 0, 5, 15, 40];

/// Per-kind gold cost factor in percent.
pub const EQUIPMENT_KIND_COST_PERCENT: [u64; 4] = [100, 120, 150, 200];

/// Chance that attempt `t -> t + 1` succeeds.
pub const EQUIPMENT_SUCCESS_RATES: [f64; 5] = [0.90, 0.70, 0.50, 0.30, 0.15];

pub fn equipment_passive_yield(kind: EquipmentKind, tier: u8) -> u64 {
    let idx = (tier as usize).min(MAX_EQUIPMENT_TIER as usize);
    EQUIPMENT_PASSIVE_YIELD[kind.index()][idx]
}

/// Cost of attempting to leave `tier`. Zero at max tier.
pub fn equipment_upgrade_cost(kind: EquipmentKind, tier: u8) -> Cost {
    if tier >= MAX_EQUIPMENT_TIER {
        return Cost::ZERO;
    }
    let t = tier as usize;
    Cost {
        primary: EQUIPMENT_UPGRADE_GOLD[t] * EQUIPMENT_KIND_COST_PERCENT[kind.index()] / 100,
        premium: EQUIPMENT_UPGRADE_GEMS[t],
    }
}

pub fn equipment_success_rate(tier: u8) -> f64 {
    EQUIPMENT_SUCCESS_RATES
        .get(tier as usize)
        .copied()
        .unwrap_or(0.0)
}

// =============================================================================
// HOUSING
// =============================================================================

pub const MAX_HOUSING_TIER: u8 = 5;

/// Purchase price per tier. Tier 0 is "no house".
pub const HOUSING_COSTS: [u64; 6] = [0, 5_000, 25_000, 100_000, 400_000, 1_500_000];

/// Passive gold per second per tier.
pub const HOUSING_YIELD: [u64; 6] = [0, 5, 20, 60, 180, 500];

pub fn housing_cost(tier: u8) -> Option<u64> {
    HOUSING_COSTS.get(tier as usize).copied()
}

pub fn housing_yield(tier: u8) -> u64 {
    HOUSING_YIELD.get(tier as usize).copied().unwrap_or(0)
}

// =============================================================================
// CONSUMABLES
// =============================================================================

/// (duration seconds, multiplier, gem price)
pub fn consumable_profile(kind: ConsumableKind) -> (u32, f64, u64) {
    match kind {
        ConsumableKind::Coffee => (60, 1.5, 5),
        ConsumableKind::EnergyDrink => (30, 2.0, 10),
        ConsumableKind::LuckyClover => (120, 1.3, 8),
        ConsumableKind::GoldenApple => (20, 3.0, 25),
    }
}

// =============================================================================
// OFFLINE
// =============================================================================

/// Share of idle income paid for time spent away.
pub const OFFLINE_MULTIPLIER: f64 = 0.25;

/// Offline time is capped at one week.
pub const MAX_OFFLINE_SECONDS: i64 = 7 * 24 * 60 * 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_cost_is_linear_in_level() {
        assert_eq!(skill_level_cost(ActivityKind::Tap, 0, 0), 10);
        assert_eq!(skill_level_cost(ActivityKind::Tap, 0, 9), 100);
        assert_eq!(skill_level_cost(ActivityKind::Language, 2, 1), 10_000);
    }

    #[test]
    fn test_unknown_skill_tier_yields_nothing() {
        assert_eq!(skill_gold_per_level(ActivityKind::Tap, 7), 0);
    }

    #[test]
    fn test_equipment_cost_scales_by_kind() {
        let gloves = equipment_upgrade_cost(EquipmentKind::Gloves, 0);
        let watch = equipment_upgrade_cost(EquipmentKind::Watch, 0);
        assert_eq!(gloves, Cost { primary: 500, premium: 0 });
        assert_eq!(watch, Cost { primary: 1_000, premium: 0 });
        assert_eq!(equipment_upgrade_cost(EquipmentKind::Gloves, 3).premium, 15);
        assert_eq!(equipment_upgrade_cost(EquipmentKind::Gloves, 5), Cost::ZERO);
    }

    #[test]
    fn test_success_rates_decrease_by_tier() {
        for pair in EQUIPMENT_SUCCESS_RATES.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert_eq!(equipment_success_rate(MAX_EQUIPMENT_TIER), 0.0);
    }

    #[test]
    fn test_housing_lookup() {
        assert_eq!(housing_cost(0), Some(0));
        assert_eq!(housing_cost(6), None);
        assert_eq!(housing_yield(3), 60);
    }
}
