//! Main simulation runner driving the real [`Engine`].
//!
//! Nothing here re-implements economy rules. Each run plays one activity
//! through the engine's public API and reads its ledger afterwards.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::activity::{ActionInput, ActivityKind, BlockKind, DropKind, Language, StackResult};
use crate::buffs::ConsumableKind;
use crate::core::balance::{MAX_HOUSING_TIER, SKILL_TIERS};
use crate::core::config::EconomyConfig;
use crate::engine::Engine;
use crate::error::EconomyResult;
use crate::goals::GoalState;
use crate::record::Counter;
use crate::upgrades::EquipmentKind;
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - earned {}, skills +{}, equipment {}/{}, goals {}",
                run_idx + 1,
                config.num_runs,
                stats.gold_earned,
                stats.skill_levels_bought,
                stats.equipment_successes,
                stats.equipment_attempts,
                stats.goals_claimed
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one simulated session from a fresh engine.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut engine = Engine::new(EconomyConfig::default());
    engine.complete_tutorial();
    engine.start_activity(config.activity);

    let mut fever_seconds = 0;
    let mut rejected = 0;
    for _ in 0..config.seconds_per_run {
        for _ in 0..config.actions_per_second {
            let input = roll_action(&mut engine, config, rng);
            rejected += tally("action", engine.perform_action(input, rng));
        }
        engine.advance(Duration::from_secs(1));

        if engine.fever_snapshot().is_some_and(|f| f.tier > 0) {
            fever_seconds += 1;
        }
        if config.claim_goals {
            claim_everything(&mut engine);
        }
        if config.buy_upgrades {
            rejected += buy_upgrades(&mut engine, config.activity, rng);
        }
        if config.use_consumables {
            rejected += keep_buff_running(&mut engine);
        }
    }

    let ledger = engine.ledger();
    RunStats {
        seconds: config.seconds_per_run,
        gold_earned: ledger.get(Counter::PrimaryEarned),
        gold_lost: ledger.get(Counter::PrimaryLost),
        final_gold: engine.wallet().primary(),
        skill_levels_bought: ledger.get(Counter::SkillLevelUps),
        equipment_attempts: engine.upgrades().equipment.total_attempts as u64,
        equipment_successes: engine.upgrades().equipment.total_successes as u64,
        house_tier: engine.upgrades().housing.tier(),
        goals_claimed: ledger.get(Counter::GoalsClaimed),
        fever_peaks: ledger.get(Counter::FeverPeaks),
        fever_seconds,
        rejected_calls: rejected,
    }
}

/// 1 when the engine refused the call, else 0.
fn tally<T>(what: &str, result: EconomyResult<T>) -> u64 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            debug!("simulated {} rejected: {}", what, e);
            1
        }
    }
}

/// Pick the next input for the configured activity.
fn roll_action<R: Rng>(engine: &mut Engine, config: &SimConfig, rng: &mut R) -> ActionInput {
    let good = rng.gen_bool(config.skill.clamp(0.0, 1.0));
    match config.activity {
        ActivityKind::Tap => ActionInput::Tap,
        ActivityKind::Dodge => ActionInput::Dodge(if good {
            if rng.gen_bool(0.2) {
                DropKind::GoldBar
            } else {
                DropKind::Coin
            }
        } else {
            DropKind::Bomb
        }),
        ActivityKind::Stacking => ActionInput::Stack(if good {
            if rng.gen_bool(0.1) {
                StackResult::Placed(BlockKind::Golden)
            } else {
                StackResult::Placed(BlockKind::Plain)
            }
        } else {
            StackResult::Toppled
        }),
        ActivityKind::Language => {
            let prompt = match engine.session().and_then(|s| s.prompt()) {
                Some(prompt) => prompt,
                None => engine
                    .next_language_prompt(rng)
                    .unwrap_or(Language::English),
            };
            let answer = if good {
                prompt
            } else {
                Language::ALL
                    .iter()
                    .copied()
                    .filter(|&l| l != prompt)
                    .collect::<Vec<_>>()
                    .choose(rng)
                    .copied()
                    .unwrap_or(prompt)
            };
            ActionInput::Language(answer)
        }
    }
}

fn claim_everything(engine: &mut Engine) {
    let missions: Vec<u32> = engine
        .missions()
        .iter()
        .filter(|g| g.state == GoalState::Claimable)
        .map(|g| g.id)
        .collect();
    for id in missions {
        engine.claim_mission(id);
    }
    let achievements: Vec<u32> = engine
        .achievements()
        .iter()
        .filter(|g| g.state == GoalState::Claimable)
        .map(|g| g.id)
        .collect();
    for id in achievements {
        engine.claim_achievement(id);
    }
}

/// Greedy: cheapest affordable skill level first, then equipment, then a
/// bigger house.
fn buy_upgrades<R: Rng>(engine: &mut Engine, activity: ActivityKind, rng: &mut R) -> u64 {
    let mut rejected = 0;
    loop {
        let cheapest = (0..SKILL_TIERS)
            .filter(|&tier| engine.upgrades().skills.is_unlocked(activity, tier))
            .filter_map(|tier| {
                engine
                    .upgrades()
                    .skills
                    .next_cost(activity, tier)
                    .map(|cost| (cost, tier))
            })
            .min();
        match cheapest {
            Some((cost, tier)) if cost <= engine.wallet().primary() => {
                if tally("skill upgrade", engine.upgrade_skill(activity, tier)) > 0 {
                    rejected += 1;
                    break;
                }
            }
            _ => break,
        }
    }

    for kind in EquipmentKind::ALL {
        let affordable = engine
            .upgrades()
            .equipment
            .next_cost(kind)
            .is_some_and(|cost| engine.wallet().can_afford(&cost));
        if affordable {
            rejected += tally("equipment upgrade", engine.upgrade_equipment(kind, rng));
        }
    }

    let next_tier = engine.upgrades().housing.tier() + 1;
    if next_tier <= MAX_HOUSING_TIER {
        let affordable = engine
            .upgrades()
            .housing
            .net_cost(next_tier)
            .is_some_and(|cost| cost <= engine.wallet().primary() as i64);
        if affordable {
            rejected += tally("house move", engine.move_house(next_tier));
        }
    }
    rejected
}

fn keep_buff_running(engine: &mut Engine) -> u64 {
    if !engine.buff_snapshot().active.is_empty() {
        return 0;
    }
    let kind = ConsumableKind::Coffee;
    if engine.inventory().count(kind) == 0 {
        if engine.wallet().premium() < kind.price() {
            return 0;
        }
        let bought = tally("consumable purchase", engine.buy_consumable(kind, 1));
        if bought > 0 {
            return bought;
        }
    }
    tally("consumable use", engine.use_consumable(kind))
}
