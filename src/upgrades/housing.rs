//! Housing: one owned tier at a time, old home traded in at half price.

use crate::core::balance::{housing_cost, housing_yield, MAX_HOUSING_TIER};
use crate::error::{EconomyError, EconomyResult};
use crate::wallet::{Resource, Wallet};
use log::info;
use serde::{Deserialize, Serialize};

pub const HOUSING_NAMES: [&str; 6] = ["Tent", "Studio", "Apartment", "House", "Villa", "Mansion"];

/// Result of a move. Negative `net_cost` means the player was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HousingMove {
    pub from_tier: u8,
    pub to_tier: u8,
    pub net_cost: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Housing {
    tier: u8,
}

impl Housing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn name(&self) -> &'static str {
        HOUSING_NAMES[self.tier.min(MAX_HOUSING_TIER) as usize]
    }

    pub fn set_tier(&mut self, tier: u8) {
        self.tier = tier.min(MAX_HOUSING_TIER);
    }

    pub fn passive_yield(&self) -> u64 {
        housing_yield(self.tier)
    }

    /// `cost(new) - cost(current) / 2`.
    pub fn net_cost(&self, to_tier: u8) -> Option<i64> {
        let new_cost = housing_cost(to_tier)? as i64;
        let trade_in = housing_cost(self.tier).unwrap_or(0) as i64 / 2;
        Some(new_cost - trade_in)
    }

    /// Move to `to_tier`, trading in the current home at half price.
    ///
    /// Moving to the tier already owned is rejected with `AlreadyOwned`
    /// rather than charged.
    pub fn move_to(&mut self, to_tier: u8, wallet: &mut Wallet) -> EconomyResult<HousingMove> {
        if to_tier == self.tier {
            return Err(EconomyError::AlreadyOwned);
        }
        let net_cost = self
            .net_cost(to_tier)
            .ok_or(EconomyError::InvalidTier(to_tier))?;
        if net_cost > 0 {
            wallet.debit(Resource::Primary, net_cost as u64)?;
        } else {
            wallet.credit(Resource::Primary, net_cost.unsigned_abs());
        }
        let from_tier = self.tier;
        self.tier = to_tier;
        info!(
            "moved from {} to {} (net {})",
            HOUSING_NAMES[from_tier.min(MAX_HOUSING_TIER) as usize],
            self.name(),
            net_cost
        );
        Ok(HousingMove {
            from_tier,
            to_tier,
            net_cost,
        })
    }
}
