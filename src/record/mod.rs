//! Statistics ledger and the event taxonomy that feeds it.

pub mod ledger;
pub mod progression;
pub mod types;

pub use ledger::StatLedger;
pub use progression::{GoalUpdates, Progression};
pub use types::{Counter, Milestone, RecordEvent};
