//! Player currency ledger.

use crate::error::{EconomyError, EconomyResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two currencies a player holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    /// Gold, earned by playing.
    Primary,
    /// Gems, earned from goals and spent in the shop.
    Premium,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Primary, Resource::Premium];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Primary => "gold",
            Resource::Premium => "gems",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An amount in both currencies. Used for prices and goal rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cost {
    pub primary: u64,
    pub premium: u64,
}

impl Cost {
    pub const ZERO: Cost = Cost {
        primary: 0,
        premium: 0,
    };

    pub const fn gold(amount: u64) -> Self {
        Self {
            primary: amount,
            premium: 0,
        }
    }

    pub const fn gems(amount: u64) -> Self {
        Self {
            primary: 0,
            premium: amount,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.primary == 0 && self.premium == 0
    }

    pub fn get(&self, resource: Resource) -> u64 {
        match resource {
            Resource::Primary => self.primary,
            Resource::Premium => self.premium,
        }
    }
}

/// Balances never go negative and debits are all-or-nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    primary: u64,
    premium: u64,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wallet pre-filled with the given balances (restores and tests).
    pub fn with_balances(primary: u64, premium: u64) -> Self {
        Self { primary, premium }
    }

    pub fn balance(&self, resource: Resource) -> u64 {
        match resource {
            Resource::Primary => self.primary,
            Resource::Premium => self.premium,
        }
    }

    pub fn primary(&self) -> u64 {
        self.primary
    }

    pub fn premium(&self) -> u64 {
        self.premium
    }

    fn slot(&mut self, resource: Resource) -> &mut u64 {
        match resource {
            Resource::Primary => &mut self.primary,
            Resource::Premium => &mut self.premium,
        }
    }

    pub fn credit(&mut self, resource: Resource, amount: u64) {
        let slot = self.slot(resource);
        *slot = slot.saturating_add(amount);
    }

    /// Remove `amount` if the balance covers it; otherwise leave it untouched.
    pub fn debit(&mut self, resource: Resource, amount: u64) -> EconomyResult<()> {
        self.can_cover(resource, amount)?;
        *self.slot(resource) -= amount;
        Ok(())
    }

    pub fn can_afford(&self, cost: &Cost) -> bool {
        self.primary >= cost.primary && self.premium >= cost.premium
    }

    fn can_cover(&self, resource: Resource, amount: u64) -> EconomyResult<()> {
        let available = self.balance(resource);
        if available < amount {
            return Err(EconomyError::InsufficientFunds {
                resource,
                required: amount,
                available,
            });
        }
        Ok(())
    }

    pub fn credit_cost(&mut self, cost: &Cost) {
        self.credit(Resource::Primary, cost.primary);
        self.credit(Resource::Premium, cost.premium);
    }

    /// Debit both currencies, or neither.
    pub fn debit_cost(&mut self, cost: &Cost) -> EconomyResult<()> {
        self.can_cover(Resource::Primary, cost.primary)?;
        self.can_cover(Resource::Premium, cost.premium)?;
        self.primary -= cost.primary;
        self.premium -= cost.premium;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_insufficient_leaves_balance() {
        let mut wallet = Wallet::with_balances(100, 0);
        let err = wallet.debit(Resource::Primary, 150).unwrap_err();
        assert_eq!(
            err,
            EconomyError::InsufficientFunds {
                resource: Resource::Primary,
                required: 150,
                available: 100,
            }
        );
        assert_eq!(wallet.primary(), 100);

        wallet.debit(Resource::Primary, 50).unwrap();
        assert_eq!(wallet.primary(), 50);
    }

    #[test]
    fn test_debit_exact_balance_reaches_zero() {
        let mut wallet = Wallet::with_balances(0, 7);
        wallet.debit(Resource::Premium, 7).unwrap();
        assert_eq!(wallet.premium(), 0);
        assert!(wallet.debit(Resource::Premium, 1).is_err());
    }

    #[test]
    fn test_credit_saturates() {
        let mut wallet = Wallet::with_balances(u64::MAX - 1, 0);
        wallet.credit(Resource::Primary, 10);
        assert_eq!(wallet.primary(), u64::MAX);
    }

    #[test]
    fn test_debit_cost_is_all_or_nothing() {
        let mut wallet = Wallet::with_balances(1_000, 2);
        let cost = Cost {
            primary: 500,
            premium: 5,
        };
        assert!(!wallet.can_afford(&cost));
        assert!(wallet.debit_cost(&cost).is_err());
        assert_eq!(wallet, Wallet::with_balances(1_000, 2));

        wallet.credit(Resource::Premium, 3);
        wallet.debit_cost(&cost).unwrap();
        assert_eq!(wallet, Wallet::with_balances(500, 0));
    }

    #[test]
    fn test_credit_cost_adds_both() {
        let mut wallet = Wallet::new();
        wallet.credit_cost(&Cost {
            primary: 10,
            premium: 2,
        });
        assert_eq!(wallet.balance(Resource::Primary), 10);
        assert_eq!(wallet.balance(Resource::Premium), 2);
    }
}
