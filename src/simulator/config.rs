//! Simulation configuration.

use crate::activity::ActivityKind;

/// Configuration for a batch of simulated play sessions.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated players
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Simulated seconds of play per run
    pub seconds_per_run: u64,

    /// Player actions per simulated second
    pub actions_per_second: u32,

    /// Activity every run plays
    pub activity: ActivityKind,

    /// Chance an individual action lands on its best outcome (gold bar,
    /// golden block, correct answer) rather than a plain or failing one.
    pub skill: f64,

    /// Spend gold greedily on skills, equipment and housing
    pub buy_upgrades: bool,

    /// Buy and use a consumable whenever no buff is active
    pub use_consumables: bool,

    /// Claim goals as soon as they become claimable
    pub claim_goals: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            seconds_per_run: 3_600,
            actions_per_second: 3,
            activity: ActivityKind::Tap,
            skill: 0.8,
            buy_upgrades: true,
            use_consumables: true,
            claim_goals: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Short runs for a fast balance check
    pub fn quick(activity: ActivityKind) -> Self {
        Self {
            num_runs: 20,
            seconds_per_run: 600,
            activity,
            ..Default::default()
        }
    }

    /// A player who never spends: raw earning rate of an activity
    pub fn hoarder(activity: ActivityKind) -> Self {
        Self {
            activity,
            buy_upgrades: false,
            use_consumables: false,
            ..Default::default()
        }
    }
}
