//! The economy engine: one owner for every piece of mutable player state.
//!
//! All mutations take `&mut Engine`, so timer ticks and player actions can
//! never interleave a read-modify-write. Every currency movement is also
//! recorded in the stat ledger, which re-evaluates goals before returning.

use crate::activity::{
    resolve_action, ActionInput, ActivityKind, ActivitySession, Language, SessionTick,
};
use crate::buffs::{BuffSnapshot, ConsumableInventory, ConsumableKind};
use crate::core::balance::MAX_FEVER_TIER;
use crate::core::config::EconomyConfig;
use crate::core::offline::{offline_report, OfflineReport};
use crate::error::{EconomyError, EconomyResult};
use crate::fever::FeverSnapshot;
use crate::goals::{GoalCatalog, GoalTracker, GoalView};
use crate::idle::{IdleIncome, IdlePayout};
use crate::persistence::EngineSnapshot;
use crate::record::{Milestone, Progression, RecordEvent, StatLedger};
use crate::reward::{calculate_reward, RewardInput};
use crate::upgrades::{EquipmentKind, EquipmentUpgrade, HousingMove, SkillUpgrade, UpgradeLedger};
use crate::wallet::{Cost, Resource, Wallet};
use chrono::Utc;
use log::{debug, info};
use rand::Rng;
use std::time::Duration;
use uuid::Uuid;

/// What one `advance` call did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSummary {
    pub session: SessionTick,
    pub idle: IdlePayout,
}

#[derive(Debug, Clone)]
pub struct Engine {
    player_id: String,
    config: EconomyConfig,
    wallet: Wallet,
    progression: Progression,
    upgrades: UpgradeLedger,
    inventory: ConsumableInventory,
    session: Option<ActivitySession>,
    idle: IdleIncome,
    paused: bool,
    last_save_time: i64,
}

impl Engine {
    /// A fresh player with the built-in mission and achievement catalogs.
    pub fn new(config: EconomyConfig) -> Self {
        Self::with_progression(config, Progression::default())
    }

    pub fn with_progression(config: EconomyConfig, progression: Progression) -> Self {
        let mut idle = IdleIncome::new(config.idle_income_interval());
        idle.start();
        Self {
            player_id: Uuid::new_v4().to_string(),
            config,
            wallet: Wallet::new(),
            progression,
            upgrades: UpgradeLedger::new(),
            inventory: ConsumableInventory::new(),
            session: None,
            idle,
            paused: false,
            last_save_time: Utc::now().timestamp(),
        }
    }

    /// Rebuild from a save. Goals are caught up with the restored ledger, and
    /// upgrade tiers or levels outside the balance tables are clamped.
    pub fn restore(snapshot: EngineSnapshot, config: EconomyConfig) -> Self {
        let mut missions = GoalTracker::missions();
        missions.restore(&snapshot.missions);
        let mut achievements = GoalTracker::achievements();
        achievements.restore(&snapshot.achievements);

        let mut engine = Self::with_progression(
            config,
            Progression::from_parts(snapshot.ledger, missions, achievements),
        );
        engine.player_id = snapshot.player_id;
        engine.wallet = snapshot.wallet;
        engine.upgrades = snapshot.upgrades;
        engine.upgrades.clamp_to_tables();
        engine.inventory = snapshot.inventory;
        engine.last_save_time = snapshot.last_save_time;
        info!("restored player {}", engine.player_id);
        engine
    }

    /// Persistent state as of `saved_at` (Unix seconds).
    pub fn snapshot(&self, saved_at: i64) -> EngineSnapshot {
        EngineSnapshot {
            player_id: self.player_id.clone(),
            last_save_time: saved_at,
            wallet: self.wallet.clone(),
            ledger: self.progression.ledger().clone(),
            missions: self.progression.missions().records(),
            achievements: self.progression.achievements().records(),
            upgrades: self.upgrades.clone(),
            inventory: self.inventory.clone(),
        }
    }

    pub fn mark_saved(&mut self, saved_at: i64) {
        self.last_save_time = saved_at;
    }

    // ========================================================================
    // Read-only views
    // ========================================================================

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn ledger(&self) -> &StatLedger {
        self.progression.ledger()
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn upgrades(&self) -> &UpgradeLedger {
        &self.upgrades
    }

    pub fn inventory(&self) -> &ConsumableInventory {
        &self.inventory
    }

    pub fn session(&self) -> Option<&ActivitySession> {
        self.session.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn last_save_time(&self) -> i64 {
        self.last_save_time
    }

    /// Gold per second paid by idle income.
    pub fn passive_yield(&self) -> u64 {
        self.upgrades.passive_yield()
    }

    pub fn fever_snapshot(&self) -> Option<FeverSnapshot> {
        self.session.as_ref().map(|s| s.fever().snapshot())
    }

    /// Active buffs of the running activity; empty when none runs.
    pub fn buff_snapshot(&self) -> BuffSnapshot {
        self.session
            .as_ref()
            .map(|s| s.buffs().snapshot())
            .unwrap_or_else(|| BuffSnapshot {
                active: Vec::new(),
                combined_multiplier: 1.0,
            })
    }

    pub fn missions(&self) -> Vec<GoalView> {
        self.progression.missions().views()
    }

    pub fn achievements(&self) -> Vec<GoalView> {
        self.progression.achievements().views()
    }

    // ========================================================================
    // Activity lifecycle
    // ========================================================================

    /// Start `kind`, tearing down whatever was running.
    pub fn start_activity(&mut self, kind: ActivityKind) {
        if self.session.is_some() {
            self.stop_activity_inner();
        }
        self.session = Some(ActivitySession::start(kind, &self.config));
        if self.paused {
            self.paused = false;
            self.idle.resume();
        }
        info!("started {}", kind.name());
    }

    pub fn stop_activity(&mut self) -> EconomyResult<()> {
        if self.session.is_none() {
            return Err(EconomyError::NoActiveActivity);
        }
        self.stop_activity_inner();
        Ok(())
    }

    fn stop_activity_inner(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
            info!("stopped {}", session.kind().name());
        }
    }

    /// Freeze fever, buffs, play time and idle income.
    pub fn pause_activity(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.pause();
        }
        self.idle.pause();
        self.paused = true;
    }

    pub fn resume_activity(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.resume();
        }
        self.idle.resume();
        self.paused = false;
    }

    /// Draw the next prompt for the language activity.
    pub fn next_language_prompt<R: Rng>(&mut self, rng: &mut R) -> EconomyResult<Language> {
        let session = self.session.as_mut().ok_or(EconomyError::NoActiveActivity)?;
        session.next_prompt(rng).ok_or(EconomyError::ActivityMismatch)
    }

    // ========================================================================
    // Player actions
    // ========================================================================

    /// Resolve one action: nudge fever, compute the reward, apply it to the
    /// wallet, then record. Returns the signed amount actually applied.
    ///
    /// A language answer consumes the current prompt and draws the next one.
    pub fn perform_action<R: Rng>(&mut self, input: ActionInput, rng: &mut R) -> EconomyResult<i64> {
        let session = self.session.as_mut().ok_or(EconomyError::NoActiveActivity)?;
        let activity = session.kind();
        if input.activity() != activity {
            return Err(EconomyError::ActivityMismatch);
        }
        let resolution = resolve_action(input, session.prompt()).ok_or(EconomyError::NoPrompt)?;
        let balance = self.config.activity(activity);

        let tier_before = session.fever.tier();
        if resolution.success {
            session.fever.gain(balance.fever_gain);
        } else {
            session.fever.gain(balance.fever_penalty);
        }
        let reached_peak = tier_before < MAX_FEVER_TIER && session.fever.tier() == MAX_FEVER_TIER;

        let amount = calculate_reward(&RewardInput {
            activity,
            balance,
            skills: &self.upgrades.skills,
            fever_multiplier: session.fever.multiplier(),
            buff_multiplier: session.buffs.combined_multiplier(),
            outcome: resolution.outcome,
        });

        if activity == ActivityKind::Language {
            session.next_prompt(rng);
        }

        let applied = self.apply_reward(amount)?;
        debug!("{} action: {:+}", activity.name(), applied);

        let event = if resolution.success {
            RecordEvent::ActionSucceeded { activity }
        } else {
            RecordEvent::ActionFailed { activity }
        };
        self.record(event);
        if applied > 0 {
            self.record(RecordEvent::CurrencyEarned {
                resource: Resource::Primary,
                amount: applied as u64,
            });
        } else if applied < 0 {
            self.record(RecordEvent::CurrencyLost {
                resource: Resource::Primary,
                amount: applied.unsigned_abs(),
            });
        }
        if reached_peak {
            info!("fever peak in {}", activity.name());
            self.record(RecordEvent::MilestoneReached(Milestone::FeverPeak));
        }
        Ok(applied)
    }

    /// Credit a reward or take a penalty, never below zero.
    fn apply_reward(&mut self, amount: i64) -> EconomyResult<i64> {
        if amount >= 0 {
            self.wallet.credit(Resource::Primary, amount as u64);
            return Ok(amount);
        }
        let loss = amount.unsigned_abs().min(self.wallet.primary());
        self.wallet.debit(Resource::Primary, loss)?;
        Ok(-(loss as i64))
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Drive every timer by `dt`: fever decay, buff decay, play time, then
    /// idle income.
    pub fn advance(&mut self, dt: Duration) -> TickSummary {
        let mut summary = TickSummary::default();

        if let Some(session) = self.session.as_mut() {
            let activity = session.kind();
            summary.session = session.advance(dt);
            for kind in &summary.session.expired_buffs {
                debug!("{} wore off", kind.name());
            }
            if summary.session.play_seconds > 0 {
                self.record(RecordEvent::PlayTime {
                    activity,
                    seconds: summary.session.play_seconds,
                });
            }
        }

        summary.idle = self.idle.advance(dt, self.upgrades.passive_yield());
        if summary.idle.seconds > 0 {
            self.record(RecordEvent::IdleTime {
                seconds: summary.idle.seconds,
            });
        }
        if summary.idle.gold > 0 {
            self.credit_earned(Cost::gold(summary.idle.gold));
        }
        summary
    }

    /// Pay the reduced offline rate for time since the last save.
    pub fn process_offline_income(&mut self, now: i64) -> OfflineReport {
        let report = offline_report(self.passive_yield(), now - self.last_save_time);
        if report.credited_seconds > 0 {
            self.record(RecordEvent::IdleTime {
                seconds: report.credited_seconds as u64,
            });
        }
        if report.gold_earned > 0 {
            info!(
                "offline for {}s, earned {} gold",
                report.elapsed_seconds, report.gold_earned
            );
            self.credit_earned(Cost::gold(report.gold_earned));
        }
        self.last_save_time = now;
        report
    }

    pub fn process_offline_income_now(&mut self) -> OfflineReport {
        self.process_offline_income(Utc::now().timestamp())
    }

    // ========================================================================
    // Upgrades and shop
    // ========================================================================

    pub fn upgrade_skill(&mut self, activity: ActivityKind, tier: u8) -> EconomyResult<SkillUpgrade> {
        let upgrade = self.upgrades.skills.upgrade(activity, tier, &mut self.wallet)?;
        if upgrade.cost > 0 {
            self.record_spent(Cost::gold(upgrade.cost));
            self.record(RecordEvent::MilestoneReached(Milestone::SkillLevelUp));
        }
        Ok(upgrade)
    }

    pub fn upgrade_equipment<R: Rng>(
        &mut self,
        kind: EquipmentKind,
        rng: &mut R,
    ) -> EconomyResult<EquipmentUpgrade> {
        let upgrade = self.upgrades.equipment.upgrade(kind, &mut self.wallet, rng)?;
        self.record_spent(upgrade.cost);
        if upgrade.success {
            self.record(RecordEvent::MilestoneReached(Milestone::EquipmentTierUp));
        }
        Ok(upgrade)
    }

    pub fn move_house(&mut self, to_tier: u8) -> EconomyResult<HousingMove> {
        let step = self.upgrades.housing.move_to(to_tier, &mut self.wallet)?;
        if step.net_cost > 0 {
            self.record_spent(Cost::gold(step.net_cost as u64));
        } else if step.net_cost < 0 {
            self.record(RecordEvent::CurrencyEarned {
                resource: Resource::Primary,
                amount: step.net_cost.unsigned_abs(),
            });
        }
        self.record(RecordEvent::MilestoneReached(Milestone::HouseMove));
        Ok(step)
    }

    /// Buy `quantity` consumables for gems.
    pub fn buy_consumable(&mut self, kind: ConsumableKind, quantity: u32) -> EconomyResult<Cost> {
        let cost = Cost::gems(kind.price().saturating_mul(quantity as u64));
        self.wallet.debit_cost(&cost)?;
        self.inventory.add(kind, quantity);
        self.record_spent(cost);
        Ok(cost)
    }

    /// Use one consumable from the inventory on the running activity.
    pub fn use_consumable(&mut self, kind: ConsumableKind) -> EconomyResult<()> {
        let session = self.session.as_mut().ok_or(EconomyError::NoActiveActivity)?;
        self.inventory.take(kind)?;
        session
            .buffs
            .activate(kind, kind.duration_seconds(), kind.multiplier());
        info!("{} active for {}s", kind.name(), kind.duration_seconds());
        self.record(RecordEvent::ConsumableUsed(kind));
        Ok(())
    }

    // ========================================================================
    // Goals
    // ========================================================================

    pub fn try_claim_mission(&mut self, id: u32) -> EconomyResult<Cost> {
        self.try_claim(GoalCatalog::Missions, id)
    }

    pub fn try_claim_achievement(&mut self, id: u32) -> EconomyResult<Cost> {
        self.try_claim(GoalCatalog::Achievements, id)
    }

    /// Zero-reward no-op unless the mission is claimable.
    pub fn claim_mission(&mut self, id: u32) -> Cost {
        self.try_claim_mission(id).unwrap_or(Cost::ZERO)
    }

    pub fn claim_achievement(&mut self, id: u32) -> Cost {
        self.try_claim_achievement(id).unwrap_or(Cost::ZERO)
    }

    fn try_claim(&mut self, catalog: GoalCatalog, id: u32) -> EconomyResult<Cost> {
        let reward = self.progression.try_claim(catalog, id, &mut self.wallet)?;
        self.record_earned(reward);
        self.record(RecordEvent::MilestoneReached(Milestone::GoalClaimed));
        Ok(reward)
    }

    /// Idempotent.
    pub fn complete_tutorial(&mut self) {
        if !self.progression.ledger().tutorial_completed() {
            info!("tutorial completed");
            self.record(RecordEvent::TutorialCompleted);
        }
    }

    // ========================================================================
    // Ledger plumbing
    // ========================================================================

    fn record(&mut self, event: RecordEvent) {
        self.progression.record(event);
    }

    fn credit_earned(&mut self, amount: Cost) {
        self.wallet.credit_cost(&amount);
        self.record_earned(amount);
    }

    fn record_earned(&mut self, amount: Cost) {
        for resource in Resource::ALL {
            let value = amount.get(resource);
            if value > 0 {
                self.record(RecordEvent::CurrencyEarned {
                    resource,
                    amount: value,
                });
            }
        }
    }

    fn record_spent(&mut self, amount: Cost) {
        for resource in Resource::ALL {
            let value = amount.get(resource);
            if value > 0 {
                self.record(RecordEvent::CurrencySpent {
                    resource,
                    amount: value,
                });
            }
        }
    }
}
