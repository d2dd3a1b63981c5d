//! Tapquest - economy and progression engine for an idle tapping game.
//!
//! Converts player actions and elapsed time into currency, tracks fever and
//! buff multipliers, and evaluates missions and achievements against a
//! lifetime statistics ledger. Rendering, input and sound live elsewhere and
//! talk to [`Engine`] only.

pub mod activity;
pub mod buffs;
pub mod core;
pub mod engine;
pub mod error;
pub mod fever;
pub mod goals;
pub mod idle;
pub mod persistence;
pub mod record;
pub mod reward;
pub mod simulator;
pub mod upgrades;
pub mod wallet;

pub use activity::{ActionInput, ActivityKind};
pub use crate::core::config::EconomyConfig;
pub use engine::{Engine, TickSummary};
pub use error::{EconomyError, EconomyResult};
pub use persistence::{EngineSnapshot, SaveManager};
pub use wallet::{Cost, Resource, Wallet};
