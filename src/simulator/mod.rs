//! Economy balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of seeded sessions through the real engine to check:
//! - Gold earned per activity and per second
//! - How fast greedy spending buys skills, equipment and housing
//! - Equipment success rates against the configured table
//! - Goal pacing and fever uptime

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
