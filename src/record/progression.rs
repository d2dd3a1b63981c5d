//! Ledger plus goal catalogs, kept in lockstep.

use super::ledger::StatLedger;
use super::types::RecordEvent;
use crate::error::EconomyResult;
use crate::goals::{GoalCatalog, GoalTracker};
use crate::wallet::{Cost, Wallet};

/// Goals that became claimable while recording one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalUpdates {
    pub missions: Vec<u32>,
    pub achievements: Vec<u32>,
}

impl GoalUpdates {
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty() && self.achievements.is_empty()
    }
}

/// The only path that mutates the ledger. Every recorded event re-evaluates
/// both goal catalogs before `record` returns.
#[derive(Debug, Clone)]
pub struct Progression {
    ledger: StatLedger,
    missions: GoalTracker,
    achievements: GoalTracker,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new(GoalTracker::missions(), GoalTracker::achievements())
    }
}

impl Progression {
    pub fn new(missions: GoalTracker, achievements: GoalTracker) -> Self {
        Self::from_parts(StatLedger::new(), missions, achievements)
    }

    /// Rebuild from saved parts. Goals are re-evaluated so a ledger restored
    /// ahead of its goal records is caught up.
    pub fn from_parts(
        ledger: StatLedger,
        mut missions: GoalTracker,
        mut achievements: GoalTracker,
    ) -> Self {
        missions.reevaluate(&ledger);
        achievements.reevaluate(&ledger);
        Self {
            ledger,
            missions,
            achievements,
        }
    }

    pub fn ledger(&self) -> &StatLedger {
        &self.ledger
    }

    pub fn missions(&self) -> &GoalTracker {
        &self.missions
    }

    pub fn achievements(&self) -> &GoalTracker {
        &self.achievements
    }

    fn tracker_mut(&mut self, catalog: GoalCatalog) -> &mut GoalTracker {
        match catalog {
            GoalCatalog::Missions => &mut self.missions,
            GoalCatalog::Achievements => &mut self.achievements,
        }
    }

    pub fn record(&mut self, event: RecordEvent) -> GoalUpdates {
        self.ledger.apply(&event);
        GoalUpdates {
            missions: self.missions.reevaluate(&self.ledger),
            achievements: self.achievements.reevaluate(&self.ledger),
        }
    }

    pub fn record_all(&mut self, events: impl IntoIterator<Item = RecordEvent>) -> GoalUpdates {
        let mut updates = GoalUpdates::default();
        for event in events {
            let step = self.record(event);
            updates.missions.extend(step.missions);
            updates.achievements.extend(step.achievements);
        }
        updates
    }

    pub fn try_claim(
        &mut self,
        catalog: GoalCatalog,
        id: u32,
        wallet: &mut Wallet,
    ) -> EconomyResult<Cost> {
        self.tracker_mut(catalog).try_claim(id, wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityKind;
    use crate::goals::{GoalDef, GoalRule, GoalState};
    use crate::record::Counter;

    const MISSION: GoalDef = GoalDef {
        id: 7,
        name: "Tap Twice",
        description: "",
        rule: GoalRule::Counter(Counter::TotalTaps),
        target: 2,
        reward: Cost::gold(10),
    };

    const ACHIEVEMENT: GoalDef = GoalDef {
        id: 7,
        name: "Also Tap Twice",
        description: "",
        rule: GoalRule::Counter(Counter::TotalTaps),
        target: 2,
        reward: Cost::gems(1),
    };

    fn progression() -> Progression {
        Progression::new(
            GoalTracker::new(GoalCatalog::Missions, &[MISSION]),
            GoalTracker::new(GoalCatalog::Achievements, &[ACHIEVEMENT]),
        )
    }

    const TAP: RecordEvent = RecordEvent::ActionSucceeded {
        activity: ActivityKind::Tap,
    };

    #[test]
    fn test_record_reevaluates_synchronously() {
        let mut p = progression();
        assert!(p.record(TAP).is_empty());
        let updates = p.record(TAP);
        assert_eq!(updates.missions, vec![7]);
        assert_eq!(updates.achievements, vec![7]);
        assert_eq!(p.missions().goal(7).unwrap().state, GoalState::Claimable);
    }

    #[test]
    fn test_catalogs_claim_independently() {
        let mut p = progression();
        p.record_all([TAP, TAP]);
        let mut wallet = Wallet::new();
        assert_eq!(
            p.try_claim(GoalCatalog::Missions, 7, &mut wallet),
            Ok(Cost::gold(10))
        );
        assert_eq!(
            p.achievements().goal(7).unwrap().state,
            GoalState::Claimable
        );
        assert_eq!(
            p.try_claim(GoalCatalog::Achievements, 7, &mut wallet),
            Ok(Cost::gems(1))
        );
        assert_eq!(wallet, Wallet::with_balances(10, 1));
    }

    #[test]
    fn test_from_parts_catches_up() {
        let mut ledger = StatLedger::new();
        ledger.apply(&TAP);
        ledger.apply(&TAP);
        let p = Progression::from_parts(
            ledger,
            GoalTracker::new(GoalCatalog::Missions, &[MISSION]),
            GoalTracker::new(GoalCatalog::Achievements, &[ACHIEVEMENT]),
        );
        assert_eq!(p.missions().claimable_count(), 1);
    }
}
