//! Missions and achievements.
//!
//! Both catalogs run the same [`GoalTracker`] engine against the stat ledger
//! and are claimed independently.

pub mod data;
pub mod tracker;
pub mod types;

pub use data::{achievement_def, mission_def, ACHIEVEMENTS, MISSIONS};
pub use tracker::GoalTracker;
pub use types::{Goal, GoalCatalog, GoalDef, GoalRecord, GoalRule, GoalState, GoalView};
