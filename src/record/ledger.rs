//! The statistics ledger.

use super::types::{Counter, RecordEvent};
use crate::activity::ActivityKind;
use crate::buffs::ConsumableKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifetime counters. Read freely, mutated only through [`RecordEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLedger {
    counters: BTreeMap<Counter, u64>,
    consumable_uses: BTreeMap<ConsumableKind, u64>,
    tutorial_completed: bool,
}

impl StatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, counter: Counter) -> u64 {
        self.counters.get(&counter).copied().unwrap_or(0)
    }

    pub fn consumable_uses(&self, kind: ConsumableKind) -> u64 {
        self.consumable_uses.get(&kind).copied().unwrap_or(0)
    }

    pub fn tutorial_completed(&self) -> bool {
        self.tutorial_completed
    }

    /// Seconds played across all activities (idle time excluded).
    pub fn total_play_seconds(&self) -> u64 {
        ActivityKind::ALL
            .iter()
            .map(|&a| self.get(Counter::play_time_for(a)))
            .sum()
    }

    pub fn counters(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        self.counters.iter().map(|(&c, &v)| (c, v))
    }

    fn add(&mut self, counter: Counter, amount: u64) {
        if amount == 0 {
            return;
        }
        let slot = self.counters.entry(counter).or_insert(0);
        *slot = slot.saturating_add(amount);
    }

    fn bump_streak(&mut self, activity: ActivityKind) {
        if let Some((streak, best)) = Counter::streaks_for(activity) {
            self.add(streak, 1);
            let current = self.get(streak);
            if current > self.get(best) {
                self.counters.insert(best, current);
            }
        }
    }

    fn reset_streak(&mut self, activity: ActivityKind) {
        if let Some((streak, _)) = Counter::streaks_for(activity) {
            self.counters.remove(&streak);
        }
    }

    /// Apply one event. Goal re-evaluation is the caller's job, see
    /// [`super::Progression::record`].
    pub(crate) fn apply(&mut self, event: &RecordEvent) {
        match *event {
            RecordEvent::ActionSucceeded { activity } => {
                self.add(Counter::success_for(activity), 1);
                self.bump_streak(activity);
            }
            RecordEvent::ActionFailed { activity } => {
                if let Some(counter) = Counter::failure_for(activity) {
                    self.add(counter, 1);
                }
                self.reset_streak(activity);
            }
            RecordEvent::ConsumableUsed(kind) => {
                self.add(Counter::ConsumablesUsed, 1);
                let slot = self.consumable_uses.entry(kind).or_insert(0);
                *slot = slot.saturating_add(1);
            }
            RecordEvent::PlayTime { activity, seconds } => {
                self.add(Counter::play_time_for(activity), seconds);
            }
            RecordEvent::IdleTime { seconds } => self.add(Counter::IdleSeconds, seconds),
            RecordEvent::CurrencyEarned { resource, amount } => {
                self.add(Counter::earned(resource), amount)
            }
            RecordEvent::CurrencySpent { resource, amount } => {
                self.add(Counter::spent(resource), amount)
            }
            RecordEvent::CurrencyLost { resource, amount } => {
                self.add(Counter::lost(resource), amount)
            }
            RecordEvent::TutorialCompleted => self.tutorial_completed = true,
            RecordEvent::MilestoneReached(milestone) => self.add(milestone.counter(), 1),
        }
    }
}
