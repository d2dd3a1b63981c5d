//! Equipment: passive income gear upgraded by chance.
//!
//! An attempt is two ordered steps. The full tier cost is paid first, then
//! the roll decides whether the tier advances. A failed roll keeps the tier
//! and keeps the money spent.

use crate::core::balance::{
    equipment_passive_yield, equipment_success_rate, equipment_upgrade_cost, MAX_EQUIPMENT_TIER,
};
use crate::error::{EconomyError, EconomyResult};
use crate::wallet::{Cost, Wallet};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentKind {
    Gloves,
    Shoes,
    Headband,
    Watch,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 4] = [
        EquipmentKind::Gloves,
        EquipmentKind::Shoes,
        EquipmentKind::Headband,
        EquipmentKind::Watch,
    ];

    pub fn index(&self) -> usize {
        match self {
            EquipmentKind::Gloves => 0,
            EquipmentKind::Shoes => 1,
            EquipmentKind::Headband => 2,
            EquipmentKind::Watch => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentKind::Gloves => "Gloves",
            EquipmentKind::Shoes => "Shoes",
            EquipmentKind::Headband => "Headband",
            EquipmentKind::Watch => "Watch",
        }
    }
}

/// Outcome of one paid attempt, for success/failure feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentUpgrade {
    pub kind: EquipmentKind,
    pub success: bool,
    pub from_tier: u8,
    pub to_tier: u8,
    pub cost: Cost,
}

/// Owned equipment tiers and lifetime attempt counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRack {
    tiers: [u8; 4], // indexed by EquipmentKind::index
    pub total_attempts: u32,
    pub total_successes: u32,
    pub total_failures: u32,
}

impl Default for EquipmentRack {
    fn default() -> Self {
        Self::new()
    }
}

impl EquipmentRack {
    pub fn new() -> Self {
        Self {
            tiers: [0; 4],
            total_attempts: 0,
            total_successes: 0,
            total_failures: 0,
        }
    }

    pub fn tier(&self, kind: EquipmentKind) -> u8 {
        self.tiers[kind.index()]
    }

    pub fn set_tier(&mut self, kind: EquipmentKind, tier: u8) {
        self.tiers[kind.index()] = tier.min(MAX_EQUIPMENT_TIER);
    }

    pub fn passive_yield(&self) -> u64 {
        EquipmentKind::ALL
            .iter()
            .map(|&kind| equipment_passive_yield(kind, self.tier(kind)))
            .sum()
    }

    /// Price of the next attempt, or `None` at max tier.
    pub fn next_cost(&self, kind: EquipmentKind) -> Option<Cost> {
        let tier = self.tier(kind);
        if tier >= MAX_EQUIPMENT_TIER {
            return None;
        }
        Some(equipment_upgrade_cost(kind, tier))
    }

    /// Pay for an attempt, then roll.
    pub fn upgrade<R: Rng>(
        &mut self,
        kind: EquipmentKind,
        wallet: &mut Wallet,
        rng: &mut R,
    ) -> EconomyResult<EquipmentUpgrade> {
        let from_tier = self.tier(kind);
        let cost = self.next_cost(kind).ok_or(EconomyError::Locked)?;
        wallet.debit_cost(&cost)?;

        self.total_attempts += 1;
        let success = rng.gen::<f64>() < equipment_success_rate(from_tier);
        let to_tier = if success {
            self.total_successes += 1;
            self.set_tier(kind, from_tier + 1);
            info!("{} upgraded to tier {}", kind.name(), from_tier + 1);
            from_tier + 1
        } else {
            self.total_failures += 1;
            from_tier
        };

        Ok(EquipmentUpgrade {
            kind,
            success,
            from_tier,
            to_tier,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_max_tier_is_locked_and_free() {
        let mut rack = EquipmentRack::new();
        rack.set_tier(EquipmentKind::Watch, MAX_EQUIPMENT_TIER);
        let mut wallet = Wallet::with_balances(u64::MAX, u64::MAX);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            rack.upgrade(EquipmentKind::Watch, &mut wallet, &mut rng),
            Err(EconomyError::Locked)
        );
        assert_eq!(wallet.primary(), u64::MAX);
        assert_eq!(rack.total_attempts, 0);
    }

    #[test]
    fn test_insufficient_funds_no_roll() {
        let mut rack = EquipmentRack::new();
        let mut wallet = Wallet::with_balances(499, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = rack
            .upgrade(EquipmentKind::Gloves, &mut wallet, &mut rng)
            .unwrap_err();
        assert!(matches!(err, EconomyError::InsufficientFunds { .. }));
        assert_eq!(wallet.primary(), 499);
        assert_eq!(rack.total_attempts, 0);
    }

    #[test]
    fn test_premium_part_of_cost_required() {
        let mut rack = EquipmentRack::new();
        rack.set_tier(EquipmentKind::Gloves, 2);
        let mut wallet = Wallet::with_balances(1_000_000, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(rack
            .upgrade(EquipmentKind::Gloves, &mut wallet, &mut rng)
            .is_err());
        assert_eq!(wallet.primary(), 1_000_000);
    }

    #[test]
    fn test_every_attempt_pays_and_tier_moves_at_most_one() {
        let mut rack = EquipmentRack::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            rack.set_tier(EquipmentKind::Shoes, 3);
            let mut wallet = Wallet::with_balances(48_000, 15);
            let result = rack
                .upgrade(EquipmentKind::Shoes, &mut wallet, &mut rng)
                .unwrap();
            assert_eq!(wallet.primary(), 0);
            assert_eq!(wallet.premium(), 0);
            assert_eq!(result.from_tier, 3);
            if result.success {
                assert_eq!(rack.tier(EquipmentKind::Shoes), 4);
            } else {
                assert_eq!(rack.tier(EquipmentKind::Shoes), 3);
            }
        }
        assert_eq!(rack.total_attempts, 20);
        assert_eq!(rack.total_successes + rack.total_failures, 20);
    }

    #[test]
    fn test_passive_yield_sums_kinds() {
        let mut rack = EquipmentRack::new();
        assert_eq!(rack.passive_yield(), 1 + 1 + 2 + 3);
        rack.set_tier(EquipmentKind::Watch, 2);
        assert_eq!(rack.passive_yield(), 1 + 1 + 2 + 20);
    }
}
