//! Per-activity skills: linear gold per level, linear cost per level.

use crate::activity::ActivityKind;
use crate::core::balance::{skill_level_cost, MAX_SKILL_LEVEL, SKILL_TIERS, SKILL_UNLOCK_LEVEL};
use crate::error::{EconomyError, EconomyResult};
use crate::wallet::{Resource, Wallet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub activity: ActivityKind,
    pub tier: u8,
    pub level: u32,
}

/// Result of a successful `upgrade` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillUpgrade {
    pub activity: ActivityKind,
    pub tier: u8,
    pub level: u32,
    /// Gold actually spent. Zero when the skill was already capped.
    pub cost: u64,
}

/// Every skill the player can own, one entry per (activity, tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBook {
    skills: Vec<Skill>,
}

impl Default for SkillBook {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillBook {
    pub fn new() -> Self {
        let skills = ActivityKind::ALL
            .iter()
            .flat_map(|&activity| {
                (0..SKILL_TIERS).map(move |tier| Skill {
                    activity,
                    tier,
                    level: 0,
                })
            })
            .collect();
        Self { skills }
    }

    fn find(&self, activity: ActivityKind, tier: u8) -> Option<&Skill> {
        self.skills
            .iter()
            .find(|s| s.activity == activity && s.tier == tier)
    }

    fn find_mut(&mut self, activity: ActivityKind, tier: u8) -> Option<&mut Skill> {
        self.skills
            .iter_mut()
            .find(|s| s.activity == activity && s.tier == tier)
    }

    pub fn level(&self, activity: ActivityKind, tier: u8) -> u32 {
        self.find(activity, tier).map(|s| s.level).unwrap_or(0)
    }

    /// Set a level directly, clamped to the cap. Used by restore and tests.
    pub fn set_level(&mut self, activity: ActivityKind, tier: u8, level: u32) {
        if let Some(skill) = self.find_mut(activity, tier) {
            skill.level = level.min(MAX_SKILL_LEVEL);
        }
    }

    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn for_activity(&self, activity: ActivityKind) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.activity == activity)
    }

    /// Tier 0 is always open; tier N needs tier N-1 at the unlock level.
    pub fn is_unlocked(&self, activity: ActivityKind, tier: u8) -> bool {
        if tier == 0 {
            return true;
        }
        self.level(activity, tier - 1) >= SKILL_UNLOCK_LEVEL
    }

    /// Gold needed for the next level, or `None` when capped.
    pub fn next_cost(&self, activity: ActivityKind, tier: u8) -> Option<u64> {
        let level = self.level(activity, tier);
        if level >= MAX_SKILL_LEVEL {
            return None;
        }
        Some(skill_level_cost(activity, tier, level))
    }

    /// Buy one level.
    pub fn upgrade(
        &mut self,
        activity: ActivityKind,
        tier: u8,
        wallet: &mut Wallet,
    ) -> EconomyResult<SkillUpgrade> {
        if tier >= SKILL_TIERS {
            return Err(EconomyError::InvalidTier(tier));
        }
        if !self.is_unlocked(activity, tier) {
            return Err(EconomyError::Locked);
        }
        let level = self.level(activity, tier);
        let Some(cost) = self.next_cost(activity, tier) else {
            return Ok(SkillUpgrade {
                activity,
                tier,
                level,
                cost: 0,
            });
        };
        wallet.debit(Resource::Primary, cost)?;
        self.set_level(activity, tier, level + 1);
        Ok(SkillUpgrade {
            activity,
            tier,
            level: level + 1,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_has_every_skill_at_zero() {
        let book = SkillBook::new();
        assert_eq!(book.all().len(), 4 * SKILL_TIERS as usize);
        assert!(book.all().iter().all(|s| s.level == 0));
    }

    #[test]
    fn test_upgrade_debits_and_levels() {
        let mut book = SkillBook::new();
        let mut wallet = Wallet::with_balances(100, 0);
        let up = book.upgrade(ActivityKind::Tap, 0, &mut wallet).unwrap();
        assert_eq!(up.level, 1);
        assert_eq!(up.cost, 10);
        assert_eq!(wallet.primary(), 90);
        let up = book.upgrade(ActivityKind::Tap, 0, &mut wallet).unwrap();
        assert_eq!(up.cost, 20);
        assert_eq!(wallet.primary(), 70);
    }

    #[test]
    fn test_upgrade_insufficient_funds_changes_nothing() {
        let mut book = SkillBook::new();
        let mut wallet = Wallet::with_balances(5, 0);
        let err = book.upgrade(ActivityKind::Tap, 0, &mut wallet).unwrap_err();
        assert!(matches!(err, EconomyError::InsufficientFunds { .. }));
        assert_eq!(book.level(ActivityKind::Tap, 0), 0);
        assert_eq!(wallet.primary(), 5);
    }

    #[test]
    fn test_higher_tier_locked_until_threshold() {
        let mut book = SkillBook::new();
        let mut wallet = Wallet::with_balances(1_000_000, 0);
        assert_eq!(
            book.upgrade(ActivityKind::Dodge, 1, &mut wallet),
            Err(EconomyError::Locked)
        );
        assert_eq!(wallet.primary(), 1_000_000);
        book.set_level(ActivityKind::Dodge, 0, SKILL_UNLOCK_LEVEL);
        assert!(book.upgrade(ActivityKind::Dodge, 1, &mut wallet).is_ok());
        assert!(!book.is_unlocked(ActivityKind::Dodge, 2));
    }

    #[test]
    fn test_capped_upgrade_is_free_noop() {
        let mut book = SkillBook::new();
        book.set_level(ActivityKind::Tap, 0, MAX_SKILL_LEVEL);
        let mut wallet = Wallet::with_balances(1_000_000, 0);
        let up = book.upgrade(ActivityKind::Tap, 0, &mut wallet).unwrap();
        assert_eq!(up.level, MAX_SKILL_LEVEL);
        assert_eq!(up.cost, 0);
        assert_eq!(wallet.primary(), 1_000_000);
    }

    #[test]
    fn test_invalid_tier() {
        let mut book = SkillBook::new();
        let mut wallet = Wallet::new();
        assert_eq!(
            book.upgrade(ActivityKind::Tap, SKILL_TIERS, &mut wallet),
            Err(EconomyError::InvalidTier(SKILL_TIERS))
        );
    }
}
