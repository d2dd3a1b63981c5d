//! Owned consumables.

use super::types::ConsumableKind;
use crate::error::{EconomyError, EconomyResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableInventory {
    counts: BTreeMap<ConsumableKind, u32>,
}

impl ConsumableInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: ConsumableKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn add(&mut self, kind: ConsumableKind, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let slot = self.counts.entry(kind).or_insert(0);
        *slot = slot.saturating_add(quantity);
    }

    /// Remove one item of `kind`.
    pub fn take(&mut self, kind: ConsumableKind) -> EconomyResult<()> {
        match self.counts.get_mut(&kind) {
            Some(n) if *n > 0 => {
                *n -= 1;
                if *n == 0 {
                    self.counts.remove(&kind);
                }
                Ok(())
            }
            _ => Err(EconomyError::OutOfStock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_until_empty() {
        let mut inv = ConsumableInventory::new();
        inv.add(ConsumableKind::Coffee, 2);
        inv.take(ConsumableKind::Coffee).unwrap();
        inv.take(ConsumableKind::Coffee).unwrap();
        assert_eq!(
            inv.take(ConsumableKind::Coffee),
            Err(EconomyError::OutOfStock)
        );
        assert_eq!(inv.count(ConsumableKind::Coffee), 0);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut inv = ConsumableInventory::new();
        inv.add(ConsumableKind::EnergyDrink, 1);
        assert_eq!(
            inv.take(ConsumableKind::GoldenApple),
            Err(EconomyError::OutOfStock)
        );
        assert_eq!(inv.count(ConsumableKind::EnergyDrink), 1);
    }
}
