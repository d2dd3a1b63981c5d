//! Reward calculation.
//!
//! A pure function of its inputs: given the same skill levels, fever
//! multiplier and buff product it always returns the same amount.

use crate::activity::ActivityKind;
use crate::core::balance::skill_gold_per_level;
use crate::core::config::ActivityBalance;
use crate::upgrades::SkillBook;
use serde::{Deserialize, Serialize};

/// Which reward variant an action landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardOutcome {
    Normal,
    Large,
    Small,
    /// A loss, computed as a fraction of the positive reward.
    Penalty,
}

/// Everything the calculation reads.
#[derive(Debug, Clone, Copy)]
pub struct RewardInput<'a> {
    pub activity: ActivityKind,
    pub balance: &'a ActivityBalance,
    pub skills: &'a SkillBook,
    pub fever_multiplier: f64,
    pub buff_multiplier: f64,
    pub outcome: RewardOutcome,
}

/// Activity base yield plus every owned skill's per-level gold.
pub fn base_rate(activity: ActivityKind, balance: &ActivityBalance, skills: &SkillBook) -> u64 {
    let from_skills: u64 = skills
        .for_activity(activity)
        .map(|skill| skill.level as u64 * skill_gold_per_level(activity, skill.tier))
        .sum();
    balance.base_yield + from_skills
}

fn outcome_multiplier(balance: &ActivityBalance, outcome: RewardOutcome) -> f64 {
    match outcome {
        RewardOutcome::Normal => 1.0,
        RewardOutcome::Large => balance.large_multiplier,
        RewardOutcome::Small => balance.small_multiplier,
        RewardOutcome::Penalty => 1.0,
    }
}

/// Signed currency amount for one action.
pub fn calculate_reward(input: &RewardInput<'_>) -> i64 {
    let base = base_rate(input.activity, input.balance, input.skills) as f64;
    let positive = base
        * input.fever_multiplier
        * input.buff_multiplier
        * outcome_multiplier(input.balance, input.outcome);
    let positive = positive.round().max(0.0);
    match input.outcome {
        RewardOutcome::Penalty => -((positive * input.balance.penalty_fraction).round() as i64),
        _ => positive as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EconomyConfig;

    fn input<'a>(
        config: &'a EconomyConfig,
        skills: &'a SkillBook,
        activity: ActivityKind,
        outcome: RewardOutcome,
    ) -> RewardInput<'a> {
        RewardInput {
            activity,
            balance: config.activity(activity),
            skills,
            fever_multiplier: 1.0,
            buff_multiplier: 1.0,
            outcome,
        }
    }

    #[test]
    fn test_base_rate_without_skills() {
        let config = EconomyConfig::default();
        let skills = SkillBook::new();
        let i = input(&config, &skills, ActivityKind::Tap, RewardOutcome::Normal);
        assert_eq!(calculate_reward(&i), 1);
    }

    #[test]
    fn test_skills_add_per_level_gold() {
        let config = EconomyConfig::default();
        let mut skills = SkillBook::new();
        skills.set_level(ActivityKind::Tap, 0, 4);
        skills.set_level(ActivityKind::Tap, 1, 2);
        // other activities do not count
        skills.set_level(ActivityKind::Dodge, 0, 10);
        // 1 base + 4*1 + 2*5
        assert_eq!(
            base_rate(ActivityKind::Tap, config.activity(ActivityKind::Tap), &skills),
            15
        );
    }

    #[test]
    fn test_multipliers_stack_and_round() {
        let config = EconomyConfig::default();
        let skills = SkillBook::new();
        let mut i = input(&config, &skills, ActivityKind::Dodge, RewardOutcome::Large);
        i.fever_multiplier = 2.5;
        i.buff_multiplier = 1.3;
        // 5 * 2.5 * 1.3 * 3.0 = 48.75
        assert_eq!(calculate_reward(&i), 49);
    }

    #[test]
    fn test_penalty_is_fraction_of_positive() {
        let config = EconomyConfig::default();
        let skills = SkillBook::new();
        let mut i = input(&config, &skills, ActivityKind::Dodge, RewardOutcome::Penalty);
        i.fever_multiplier = 2.0;
        // 5 * 2.0 = 10, half of it lost
        assert_eq!(calculate_reward(&i), -5);
    }

    #[test]
    fn test_deterministic() {
        let config = EconomyConfig::default();
        let mut skills = SkillBook::new();
        skills.set_level(ActivityKind::Language, 0, 7);
        let mut i = input(&config, &skills, ActivityKind::Language, RewardOutcome::Normal);
        i.fever_multiplier = 1.5;
        i.buff_multiplier = 1.95;
        let first = calculate_reward(&i);
        for _ in 0..100 {
            assert_eq!(calculate_reward(&i), first);
        }
    }
}
