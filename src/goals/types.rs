//! Goal definitions and per-goal state.

use crate::buffs::ConsumableKind;
use crate::record::{Counter, StatLedger};
use crate::wallet::Cost;
use serde::{Deserialize, Serialize};

/// Lifecycle of a goal. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GoalState {
    InProgress,
    Claimable,
    Claimed,
}

/// What a goal measures. Plain data so catalogs stay serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalRule {
    /// Any ledger counter, including the best-streak counters.
    Counter(Counter),
    ConsumableUses(ConsumableKind),
    /// Seconds across every activity.
    TotalPlayTime,
    /// 1 once the tutorial is done.
    TutorialCompleted,
}

impl GoalRule {
    /// Current progress value read from the ledger.
    pub fn value(&self, ledger: &StatLedger) -> u64 {
        match *self {
            GoalRule::Counter(counter) => ledger.get(counter),
            GoalRule::ConsumableUses(kind) => ledger.consumable_uses(kind),
            GoalRule::TotalPlayTime => ledger.total_play_seconds(),
            GoalRule::TutorialCompleted => ledger.tutorial_completed() as u64,
        }
    }

    pub fn is_complete(&self, ledger: &StatLedger, target: u64) -> bool {
        self.value(ledger) >= target
    }
}

/// Static definition of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalDef {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub rule: GoalRule,
    pub target: u64,
    pub reward: Cost,
}

/// A goal and its progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub def: GoalDef,
    pub current: u64,
    pub state: GoalState,
}

impl Goal {
    pub fn new(def: GoalDef) -> Self {
        Self {
            def,
            current: 0,
            state: GoalState::InProgress,
        }
    }

    pub fn id(&self) -> u32 {
        self.def.id
    }

    /// Progress in 0.0..=1.0 for progress bars.
    pub fn fraction(&self) -> f64 {
        if self.def.target == 0 {
            return 1.0;
        }
        (self.current as f64 / self.def.target as f64).min(1.0)
    }
}

/// Persisted progress for one goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: u32,
    pub current: u64,
    pub state: GoalState,
}

/// Rendering view of a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalView {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub current: u64,
    pub target: u64,
    pub state: GoalState,
    pub reward: Cost,
}

impl From<&Goal> for GoalView {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.def.id,
            name: goal.def.name,
            description: goal.def.description,
            current: goal.current,
            target: goal.def.target,
            state: goal.state,
            reward: goal.def.reward,
        }
    }
}

/// Which catalog a tracker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCatalog {
    Missions,
    Achievements,
}

impl GoalCatalog {
    pub fn name(&self) -> &'static str {
        match self {
            GoalCatalog::Missions => "mission",
            GoalCatalog::Achievements => "achievement",
        }
    }
}
