//! Counter names and the closed event taxonomy.

use crate::activity::ActivityKind;
use crate::buffs::ConsumableKind;
use crate::wallet::Resource;
use serde::{Deserialize, Serialize};

/// Named ledger counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Counter {
    // Activity outcomes
    TotalTaps,
    DodgeGoldHits,
    DodgeBombHits,
    DodgeStreak,
    DodgeBestStreak,
    StackSuccesses,
    StackFailures,
    StackStreak,
    StackBestStreak,
    LanguageCorrect,
    LanguageWrong,
    LanguageStreak,
    LanguageBestStreak,

    // Time
    TapPlaySeconds,
    DodgePlaySeconds,
    StackingPlaySeconds,
    LanguagePlaySeconds,
    IdleSeconds,

    // Currency flow
    PrimaryEarned,
    PrimarySpent,
    PrimaryLost,
    PremiumEarned,
    PremiumSpent,
    PremiumLost,

    // Items and milestones
    ConsumablesUsed,
    FeverPeaks,
    SkillLevelUps,
    EquipmentTierUps,
    HouseMoves,
    GoalsClaimed,
}

impl Counter {
    /// Streak counters are the only ones allowed to go down.
    pub fn is_streak(&self) -> bool {
        matches!(
            self,
            Counter::DodgeStreak | Counter::StackStreak | Counter::LanguageStreak
        )
    }

    pub fn success_for(activity: ActivityKind) -> Counter {
        match activity {
            ActivityKind::Tap => Counter::TotalTaps,
            ActivityKind::Dodge => Counter::DodgeGoldHits,
            ActivityKind::Stacking => Counter::StackSuccesses,
            ActivityKind::Language => Counter::LanguageCorrect,
        }
    }

    pub fn failure_for(activity: ActivityKind) -> Option<Counter> {
        match activity {
            ActivityKind::Tap => None,
            ActivityKind::Dodge => Some(Counter::DodgeBombHits),
            ActivityKind::Stacking => Some(Counter::StackFailures),
            ActivityKind::Language => Some(Counter::LanguageWrong),
        }
    }

    /// (current streak, best streak) for activities that keep one.
    pub fn streaks_for(activity: ActivityKind) -> Option<(Counter, Counter)> {
        match activity {
            ActivityKind::Tap => None,
            ActivityKind::Dodge => Some((Counter::DodgeStreak, Counter::DodgeBestStreak)),
            ActivityKind::Stacking => Some((Counter::StackStreak, Counter::StackBestStreak)),
            ActivityKind::Language => Some((Counter::LanguageStreak, Counter::LanguageBestStreak)),
        }
    }

    pub fn play_time_for(activity: ActivityKind) -> Counter {
        match activity {
            ActivityKind::Tap => Counter::TapPlaySeconds,
            ActivityKind::Dodge => Counter::DodgePlaySeconds,
            ActivityKind::Stacking => Counter::StackingPlaySeconds,
            ActivityKind::Language => Counter::LanguagePlaySeconds,
        }
    }

    pub fn earned(resource: Resource) -> Counter {
        match resource {
            Resource::Primary => Counter::PrimaryEarned,
            Resource::Premium => Counter::PremiumEarned,
        }
    }

    pub fn spent(resource: Resource) -> Counter {
        match resource {
            Resource::Primary => Counter::PrimarySpent,
            Resource::Premium => Counter::PremiumSpent,
        }
    }

    pub fn lost(resource: Resource) -> Counter {
        match resource {
            Resource::Primary => Counter::PrimaryLost,
            Resource::Premium => Counter::PremiumLost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    /// Fever entered its top tier.
    FeverPeak,
    SkillLevelUp,
    EquipmentTierUp,
    HouseMove,
    GoalClaimed,
}

impl Milestone {
    pub fn counter(&self) -> Counter {
        match self {
            Milestone::FeverPeak => Counter::FeverPeaks,
            Milestone::SkillLevelUp => Counter::SkillLevelUps,
            Milestone::EquipmentTierUp => Counter::EquipmentTierUps,
            Milestone::HouseMove => Counter::HouseMoves,
            Milestone::GoalClaimed => Counter::GoalsClaimed,
        }
    }
}

/// Everything that can change the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordEvent {
    ActionSucceeded { activity: ActivityKind },
    ActionFailed { activity: ActivityKind },
    ConsumableUsed(ConsumableKind),
    PlayTime { activity: ActivityKind, seconds: u64 },
    IdleTime { seconds: u64 },
    CurrencyEarned { resource: Resource, amount: u64 },
    CurrencySpent { resource: Resource, amount: u64 },
    /// Currency taken by a penalty outcome.
    CurrencyLost { resource: Resource, amount: u64 },
    TutorialCompleted,
    MilestoneReached(Milestone),
}
