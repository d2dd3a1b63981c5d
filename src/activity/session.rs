//! One running activity: fever meter, buff pool and play clock.

use super::types::{ActivityKind, Language};
use crate::buffs::BuffPool;
use crate::buffs::ConsumableKind;
use crate::core::config::EconomyConfig;
use crate::core::tick::Ticker;
use crate::fever::FeverMeter;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
}

/// What one `advance` call did inside the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTick {
    pub fever_ticks: u64,
    pub expired_buffs: Vec<ConsumableKind>,
    pub play_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct ActivitySession {
    kind: ActivityKind,
    state: SessionState,
    pub(crate) fever: FeverMeter,
    pub(crate) buffs: BuffPool,
    play_clock: Ticker,
    /// Play time below a whole second, carried between `advance` calls.
    play_carry_ms: u64,
    prompt: Option<Language>,
}

impl ActivitySession {
    /// A fresh, running session: fever at zero and decaying, play clock on.
    pub fn start(kind: ActivityKind, config: &EconomyConfig) -> Self {
        let mut fever = FeverMeter::new(config.activity(kind).fever.clone());
        fever.reset();
        fever.start_decay();
        let mut play_clock = Ticker::new(config.play_time_interval());
        play_clock.start();
        Self {
            kind,
            state: SessionState::Running,
            fever,
            buffs: BuffPool::new(config.buff_tick_interval()),
            play_clock,
            play_carry_ms: 0,
            prompt: None,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn fever(&self) -> &FeverMeter {
        &self.fever
    }

    pub fn buffs(&self) -> &BuffPool {
        &self.buffs
    }

    pub fn prompt(&self) -> Option<Language> {
        self.prompt
    }

    /// Draw the next language prompt. Only meaningful for `Language`.
    pub fn next_prompt<R: Rng>(&mut self, rng: &mut R) -> Option<Language> {
        if self.kind != ActivityKind::Language {
            return None;
        }
        self.prompt = Language::ALL.choose(rng).copied();
        self.prompt
    }

    pub fn pause(&mut self) {
        self.state = SessionState::Paused;
        self.fever.pause();
        self.buffs.pause();
        self.play_clock.pause();
    }

    pub fn resume(&mut self) {
        self.state = SessionState::Running;
        self.fever.resume();
        self.buffs.resume();
        self.play_clock.resume();
    }

    /// Halt every timer and drop buffs. A partial play-time second is lost.
    pub fn stop(&mut self) {
        self.play_clock.stop();
        self.play_carry_ms = 0;
        self.fever.stop_decay();
        self.buffs.stop();
        self.prompt = None;
    }

    /// Fever decay first, then buffs, then the play clock.
    pub fn advance(&mut self, dt: Duration) -> SessionTick {
        let fever_ticks = self.fever.advance(dt);
        let expired_buffs = self.buffs.advance(dt);
        let clock_ticks = self.play_clock.advance(dt);
        let interval_ms = self.play_clock.interval().as_millis() as u64;
        let play_ms = self
            .play_carry_ms
            .saturating_add(clock_ticks.saturating_mul(interval_ms));
        self.play_carry_ms = play_ms % 1000;
        let play_seconds = play_ms / 1000;
        SessionTick {
            fever_ticks,
            expired_buffs,
            play_seconds,
        }
    }
}
