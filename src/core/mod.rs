//! Shared tables, configuration and timing primitives.

pub mod balance;
pub mod config;
pub mod offline;
pub mod tick;

pub use config::{ActivityBalance, EconomyConfig, FeverConfig};
pub use offline::{calculate_offline_income, offline_report, OfflineReport};
pub use tick::Ticker;
