//! Consumable kinds and buff entries.

use crate::core::balance::consumable_profile;
use serde::{Deserialize, Serialize};

/// Shop items that grant a timed reward multiplier when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConsumableKind {
    Coffee,
    EnergyDrink,
    LuckyClover,
    GoldenApple,
}

impl ConsumableKind {
    pub const ALL: [ConsumableKind; 4] = [
        ConsumableKind::Coffee,
        ConsumableKind::EnergyDrink,
        ConsumableKind::LuckyClover,
        ConsumableKind::GoldenApple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConsumableKind::Coffee => "Coffee",
            ConsumableKind::EnergyDrink => "Energy Drink",
            ConsumableKind::LuckyClover => "Lucky Clover",
            ConsumableKind::GoldenApple => "Golden Apple",
        }
    }

    pub fn duration_seconds(&self) -> u32 {
        consumable_profile(*self).0
    }

    pub fn multiplier(&self) -> f64 {
        consumable_profile(*self).1
    }

    /// Shop price in gems.
    pub fn price(&self) -> u64 {
        consumable_profile(*self).2
    }
}

/// One active buff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub kind: ConsumableKind,
    pub remaining_seconds: u32,
    pub multiplier: f64,
}

/// Read-only view of the pool for rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuffSnapshot {
    pub active: Vec<Buff>,
    pub combined_multiplier: f64,
}
