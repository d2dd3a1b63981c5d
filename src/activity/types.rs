//! Activity kinds and the per-activity action inputs.

use crate::reward::RewardOutcome;
use serde::{Deserialize, Serialize};

/// The four mini-games that earn currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityKind {
    Tap,
    Dodge,
    Stacking,
    Language,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Tap,
        ActivityKind::Dodge,
        ActivityKind::Stacking,
        ActivityKind::Language,
    ];

    /// Row index into the balance tables.
    pub fn index(&self) -> usize {
        match self {
            ActivityKind::Tap => 0,
            ActivityKind::Dodge => 1,
            ActivityKind::Stacking => 2,
            ActivityKind::Language => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivityKind::Tap => "Tap",
            ActivityKind::Dodge => "Dodge",
            ActivityKind::Stacking => "Stacking",
            ActivityKind::Language => "Language",
        }
    }
}

/// Items falling in the dodge game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropKind {
    Coin,
    GoldBar,
    Bomb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Plain,
    Golden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackResult {
    Placed(BlockKind),
    Toppled,
}

/// Answers in the language matching game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Japanese,
    Korean,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
    ];

    pub fn greeting(&self) -> &'static str {
        match self {
            Language::English => "Hello",
            Language::Spanish => "Hola",
            Language::French => "Bonjour",
            Language::German => "Hallo",
            Language::Japanese => "こんにちは",
            Language::Korean => "안녕하세요",
            Language::Chinese => "你好",
        }
    }
}

/// One player action, tagged with its activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionInput {
    Tap,
    /// The player collided with a dropped item.
    Dodge(DropKind),
    Stack(StackResult),
    /// The language the player picked for the current prompt.
    Language(Language),
}

impl ActionInput {
    pub fn activity(&self) -> ActivityKind {
        match self {
            ActionInput::Tap => ActivityKind::Tap,
            ActionInput::Dodge(_) => ActivityKind::Dodge,
            ActionInput::Stack(_) => ActivityKind::Stacking,
            ActionInput::Language(_) => ActivityKind::Language,
        }
    }
}

/// How an action resolved: whether it counts as a success and which reward
/// variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionResolution {
    pub success: bool,
    pub outcome: RewardOutcome,
}

/// Resolve an input. `prompt` is the language currently asked, if any.
pub fn resolve_action(input: ActionInput, prompt: Option<Language>) -> Option<ActionResolution> {
    let (success, outcome) = match input {
        ActionInput::Tap => (true, RewardOutcome::Normal),
        ActionInput::Dodge(DropKind::Coin) => (true, RewardOutcome::Small),
        ActionInput::Dodge(DropKind::GoldBar) => (true, RewardOutcome::Large),
        ActionInput::Dodge(DropKind::Bomb) => (false, RewardOutcome::Penalty),
        ActionInput::Stack(StackResult::Placed(BlockKind::Plain)) => (true, RewardOutcome::Normal),
        ActionInput::Stack(StackResult::Placed(BlockKind::Golden)) => (true, RewardOutcome::Large),
        ActionInput::Stack(StackResult::Toppled) => (false, RewardOutcome::Penalty),
        ActionInput::Language(selected) => {
            let expected = prompt?;
            if selected == expected {
                (true, RewardOutcome::Normal)
            } else {
                (false, RewardOutcome::Penalty)
            }
        }
    };
    Some(ActionResolution { success, outcome })
}
