//! Consumable buffs.
//!
//! Using a consumable activates a timed reward multiplier in the running
//! activity's [`BuffPool`]. Buffs of different kinds stack multiplicatively.

pub mod inventory;
pub mod pool;
pub mod types;

pub use inventory::ConsumableInventory;
pub use pool::BuffPool;
pub use types::{Buff, BuffSnapshot, ConsumableKind};
