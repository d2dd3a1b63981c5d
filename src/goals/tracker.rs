//! The goal engine shared by missions and achievements.

use super::data::{ACHIEVEMENTS, MISSIONS};
use super::types::{Goal, GoalCatalog, GoalDef, GoalRecord, GoalState, GoalView};
use crate::error::{EconomyError, EconomyResult};
use crate::record::StatLedger;
use crate::wallet::{Cost, Wallet};
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct GoalTracker {
    catalog: GoalCatalog,
    goals: Vec<Goal>,
}

impl GoalTracker {
    pub fn new(catalog: GoalCatalog, defs: &[GoalDef]) -> Self {
        Self {
            catalog,
            goals: defs.iter().copied().map(Goal::new).collect(),
        }
    }

    pub fn missions() -> Self {
        Self::new(GoalCatalog::Missions, MISSIONS)
    }

    pub fn achievements() -> Self {
        Self::new(GoalCatalog::Achievements, ACHIEVEMENTS)
    }

    pub fn catalog(&self) -> GoalCatalog {
        self.catalog
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: u32) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id() == id)
    }

    pub fn views(&self) -> Vec<GoalView> {
        self.goals.iter().map(GoalView::from).collect()
    }

    pub fn claimable_count(&self) -> usize {
        self.goals
            .iter()
            .filter(|g| g.state == GoalState::Claimable)
            .count()
    }

    /// Refresh in-progress goals from the ledger. Returns ids that became
    /// claimable during this call.
    pub fn reevaluate(&mut self, ledger: &StatLedger) -> Vec<u32> {
        let mut newly_claimable = Vec::new();
        for goal in self
            .goals
            .iter_mut()
            .filter(|g| g.state == GoalState::InProgress)
        {
            goal.current = goal.def.rule.value(ledger);
            if goal.def.rule.is_complete(ledger, goal.def.target) {
                goal.state = GoalState::Claimable;
                info!("{} ready to claim: {}", self.catalog.name(), goal.def.name);
                newly_claimable.push(goal.id());
            }
        }
        newly_claimable
    }

    /// Pay the reward of a claimable goal and mark it claimed.
    pub fn try_claim(&mut self, id: u32, wallet: &mut Wallet) -> EconomyResult<Cost> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id() == id)
            .ok_or(EconomyError::UnknownGoal(id))?;
        match goal.state {
            GoalState::InProgress => Err(EconomyError::NotClaimable),
            GoalState::Claimed => Err(EconomyError::AlreadyClaimed),
            GoalState::Claimable => {
                wallet.credit_cost(&goal.def.reward);
                goal.state = GoalState::Claimed;
                info!("{} claimed: {}", self.catalog.name(), goal.def.name);
                Ok(goal.def.reward)
            }
        }
    }

    /// Like `try_claim`, but a rejected claim is a zero-reward no-op.
    pub fn claim(&mut self, id: u32, wallet: &mut Wallet) -> Cost {
        self.try_claim(id, wallet).unwrap_or_else(|e| {
            debug!("{} {} not claimed: {}", self.catalog.name(), id, e);
            Cost::ZERO
        })
    }

    pub fn records(&self) -> Vec<GoalRecord> {
        self.goals
            .iter()
            .map(|g| GoalRecord {
                id: g.id(),
                current: g.current,
                state: g.state,
            })
            .collect()
    }

    /// Load saved progress. Records for unknown ids are ignored.
    pub fn restore(&mut self, records: &[GoalRecord]) {
        for record in records {
            if let Some(goal) = self.goals.iter_mut().find(|g| g.id() == record.id) {
                goal.current = record.current;
                goal.state = record.state;
            }
        }
    }
}
