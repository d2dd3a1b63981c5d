//! Static mission and achievement catalogs.

use super::types::{GoalDef, GoalRule};
use crate::buffs::ConsumableKind;
use crate::record::Counter;
use crate::wallet::Cost;

/// Missions: short objectives paying gold and a few gems.
pub const MISSIONS: &[GoalDef] = &[
    GoalDef {
        id: 101,
        name: "First Steps",
        description: "Finish the tutorial",
        rule: GoalRule::TutorialCompleted,
        target: 1,
        reward: Cost {
            primary: 100,
            premium: 5,
        },
    },
    GoalDef {
        id: 102,
        name: "Warm Up",
        description: "Tap 100 times",
        rule: GoalRule::Counter(Counter::TotalTaps),
        target: 100,
        reward: Cost::gold(200),
    },
    GoalDef {
        id: 103,
        name: "Gold Rush",
        description: "Catch 50 falling coins or bars",
        rule: GoalRule::Counter(Counter::DodgeGoldHits),
        target: 50,
        reward: Cost::gold(500),
    },
    GoalDef {
        id: 104,
        name: "Steady Hands",
        description: "Place 30 blocks",
        rule: GoalRule::Counter(Counter::StackSuccesses),
        target: 30,
        reward: Cost::gold(500),
    },
    GoalDef {
        id: 105,
        name: "Polyglot",
        description: "Answer 25 language prompts correctly",
        rule: GoalRule::Counter(Counter::LanguageCorrect),
        target: 25,
        reward: Cost::gold(600),
    },
    GoalDef {
        id: 106,
        name: "Caffeinated",
        description: "Drink a coffee",
        rule: GoalRule::ConsumableUses(ConsumableKind::Coffee),
        target: 1,
        reward: Cost::gems(3),
    },
    GoalDef {
        id: 107,
        name: "On Fire",
        description: "Reach top fever",
        rule: GoalRule::Counter(Counter::FeverPeaks),
        target: 1,
        reward: Cost {
            primary: 300,
            premium: 2,
        },
    },
    GoalDef {
        id: 108,
        name: "Investor",
        description: "Buy 5 skill levels",
        rule: GoalRule::Counter(Counter::SkillLevelUps),
        target: 5,
        reward: Cost::gold(400),
    },
    GoalDef {
        id: 109,
        name: "Ten Minutes",
        description: "Play for 10 minutes",
        rule: GoalRule::TotalPlayTime,
        target: 600,
        reward: Cost::gems(5),
    },
    GoalDef {
        id: 110,
        name: "Nest Egg",
        description: "Earn 10,000 gold",
        rule: GoalRule::Counter(Counter::PrimaryEarned),
        target: 10_000,
        reward: Cost::gems(10),
    },
];

/// Achievements: long-running milestones paying gems.
pub const ACHIEVEMENTS: &[GoalDef] = &[
    GoalDef {
        id: 1,
        name: "Tapper I",
        description: "Tap 1,000 times",
        rule: GoalRule::Counter(Counter::TotalTaps),
        target: 1_000,
        reward: Cost::gems(10),
    },
    GoalDef {
        id: 2,
        name: "Tapper II",
        description: "Tap 10,000 times",
        rule: GoalRule::Counter(Counter::TotalTaps),
        target: 10_000,
        reward: Cost::gems(30),
    },
    GoalDef {
        id: 3,
        name: "Tapper III",
        description: "Tap 100,000 times",
        rule: GoalRule::Counter(Counter::TotalTaps),
        target: 100_000,
        reward: Cost::gems(100),
    },
    GoalDef {
        id: 10,
        name: "Untouchable",
        description: "Catch 25 items in a row without a bomb",
        rule: GoalRule::Counter(Counter::DodgeStreak),
        target: 25,
        reward: Cost::gems(15),
    },
    GoalDef {
        id: 11,
        name: "Treasure Hunter",
        description: "Catch 1,000 coins or bars",
        rule: GoalRule::Counter(Counter::DodgeGoldHits),
        target: 1_000,
        reward: Cost::gems(25),
    },
    GoalDef {
        id: 20,
        name: "Tower Builder",
        description: "Stack 20 blocks without toppling",
        rule: GoalRule::Counter(Counter::StackStreak),
        target: 20,
        reward: Cost::gems(15),
    },
    GoalDef {
        id: 21,
        name: "Architect",
        description: "Place 1,000 blocks",
        rule: GoalRule::Counter(Counter::StackSuccesses),
        target: 1_000,
        reward: Cost::gems(25),
    },
    GoalDef {
        id: 30,
        name: "Fluent",
        description: "Answer 30 prompts in a row correctly",
        rule: GoalRule::Counter(Counter::LanguageStreak),
        target: 30,
        reward: Cost::gems(20),
    },
    GoalDef {
        id: 31,
        name: "Linguist",
        description: "Answer 1,000 prompts correctly",
        rule: GoalRule::Counter(Counter::LanguageCorrect),
        target: 1_000,
        reward: Cost::gems(25),
    },
    GoalDef {
        id: 40,
        name: "Regular",
        description: "Use 50 consumables",
        rule: GoalRule::Counter(Counter::ConsumablesUsed),
        target: 50,
        reward: Cost::gems(20),
    },
    GoalDef {
        id: 41,
        name: "Golden Touch",
        description: "Eat 10 golden apples",
        rule: GoalRule::ConsumableUses(ConsumableKind::GoldenApple),
        target: 10,
        reward: Cost::gems(30),
    },
    GoalDef {
        id: 50,
        name: "Fever Dream",
        description: "Reach top fever 100 times",
        rule: GoalRule::Counter(Counter::FeverPeaks),
        target: 100,
        reward: Cost::gems(30),
    },
    GoalDef {
        id: 60,
        name: "Blacksmith",
        description: "Upgrade equipment 10 times",
        rule: GoalRule::Counter(Counter::EquipmentTierUps),
        target: 10,
        reward: Cost::gems(40),
    },
    GoalDef {
        id: 61,
        name: "Homeowner",
        description: "Move house 3 times",
        rule: GoalRule::Counter(Counter::HouseMoves),
        target: 3,
        reward: Cost::gems(40),
    },
    GoalDef {
        id: 70,
        name: "Dedicated",
        description: "Play for 10 hours",
        rule: GoalRule::TotalPlayTime,
        target: 36_000,
        reward: Cost::gems(50),
    },
    GoalDef {
        id: 71,
        name: "Passive Income",
        description: "Stay idle for 24 hours",
        rule: GoalRule::Counter(Counter::IdleSeconds),
        target: 86_400,
        reward: Cost::gems(30),
    },
    GoalDef {
        id: 80,
        name: "Millionaire",
        description: "Earn 1,000,000 gold",
        rule: GoalRule::Counter(Counter::PrimaryEarned),
        target: 1_000_000,
        reward: Cost::gems(100),
    },
    GoalDef {
        id: 81,
        name: "Big Spender",
        description: "Spend 100,000 gold",
        rule: GoalRule::Counter(Counter::PrimarySpent),
        target: 100_000,
        reward: Cost::gems(50),
    },
];

pub fn mission_def(id: u32) -> Option<&'static GoalDef> {
    MISSIONS.iter().find(|d| d.id == id)
}

pub fn achievement_def(id: u32) -> Option<&'static GoalDef> {
    ACHIEVEMENTS.iter().find(|d| d.id == id)
}
