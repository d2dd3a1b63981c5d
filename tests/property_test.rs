//! Property tests for the economy invariants.

use proptest::prelude::*;
use std::time::Duration;
use tapquest::buffs::{BuffPool, ConsumableKind};
use tapquest::core::balance::MAX_FEVER;
use tapquest::core::config::FeverConfig;
use tapquest::fever::{fever_tier, FeverMeter};
use tapquest::goals::GoalCatalog;
use tapquest::record::{Counter, Progression, RecordEvent};
use tapquest::{ActivityKind, Cost, EconomyError, Resource, Wallet};

fn consumable() -> impl Strategy<Value = ConsumableKind> {
    prop::sample::select(ConsumableKind::ALL.to_vec())
}

fn activity() -> impl Strategy<Value = ActivityKind> {
    prop::sample::select(ActivityKind::ALL.to_vec())
}

fn event() -> impl Strategy<Value = RecordEvent> {
    prop_oneof![
        activity().prop_map(|activity| RecordEvent::ActionSucceeded { activity }),
        activity().prop_map(|activity| RecordEvent::ActionFailed { activity }),
        consumable().prop_map(RecordEvent::ConsumableUsed),
        (activity(), 0u64..120).prop_map(|(activity, seconds)| RecordEvent::PlayTime {
            activity,
            seconds
        }),
        (0u64..10_000).prop_map(|amount| RecordEvent::CurrencyEarned {
            resource: Resource::Primary,
            amount
        }),
        Just(RecordEvent::TutorialCompleted),
    ]
}

proptest! {
    #[test]
    fn fever_stays_in_bounds(gains in prop::collection::vec(-500.0f64..500.0, 0..200)) {
        let mut meter = FeverMeter::new(FeverConfig::default());
        for gain in gains {
            meter.gain(gain);
            prop_assert!(meter.value() >= 0.0 && meter.value() <= MAX_FEVER);
            prop_assert_eq!(meter.tier(), fever_tier(meter.value()));
        }
    }

    #[test]
    fn fever_decays_linearly_to_zero(start in 0.0f64..400.0, millis in 0u64..120_000) {
        let config = FeverConfig::default();
        let ticks = millis / config.decay_interval_ms;
        let expected = (start - config.decay_per_tick() * ticks as f64).max(0.0);

        let mut meter = FeverMeter::new(config);
        meter.gain(start);
        meter.start_decay();
        meter.advance(Duration::from_millis(millis));
        prop_assert_eq!(meter.value(), expected);
    }

    #[test]
    fn buff_product_matches_active_entries(
        uses in prop::collection::vec((consumable(), 1u32..60, 1.0f64..4.0), 0..12),
        elapsed in 0u64..90,
    ) {
        let mut pool = BuffPool::new(Duration::from_secs(1));
        for (kind, duration, multiplier) in &uses {
            pool.activate(*kind, *duration, *multiplier);
        }
        pool.advance(Duration::from_secs(elapsed));
        let snapshot = pool.snapshot();
        let expected: f64 = snapshot.active.iter().map(|b| b.multiplier).product();
        prop_assert_eq!(pool.combined_multiplier(), expected);
        prop_assert!(pool.len() <= ConsumableKind::ALL.len());
        prop_assert!(snapshot.active.iter().all(|b| b.remaining_seconds > 0));
        if pool.is_empty() {
            prop_assert_eq!(pool.combined_multiplier(), 1.0);
            prop_assert!(!pool.is_ticking());
        }
    }

    #[test]
    fn wallet_debit_is_all_or_nothing(
        primary in 0u64..1_000,
        premium in 0u64..100,
        cost_primary in 0u64..1_500,
        cost_premium in 0u64..150,
    ) {
        let mut wallet = Wallet::with_balances(primary, premium);
        let cost = Cost { primary: cost_primary, premium: cost_premium };
        match wallet.debit_cost(&cost) {
            Ok(()) => {
                prop_assert_eq!(wallet.primary(), primary - cost_primary);
                prop_assert_eq!(wallet.premium(), premium - cost_premium);
            }
            Err(EconomyError::InsufficientFunds { .. }) => {
                prop_assert_eq!(wallet, Wallet::with_balances(primary, premium));
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn non_streak_counters_never_decrease(events in prop::collection::vec(event(), 0..100)) {
        let mut progression = Progression::default();
        let mut previous: Vec<(Counter, u64)> = Vec::new();
        for event in events {
            progression.record(event);
            let ledger = progression.ledger();
            for &(counter, value) in &previous {
                if !counter.is_streak() {
                    prop_assert!(ledger.get(counter) >= value);
                }
            }
            previous = ledger.counters().collect();
        }
    }

    #[test]
    fn claimed_goals_stay_claimed(events in prop::collection::vec(event(), 0..100)) {
        let mut progression = Progression::default();
        let mut wallet = Wallet::new();
        let mut claimed = Vec::new();
        for event in events {
            let updates = progression.record(event);
            for id in updates.missions {
                progression.try_claim(GoalCatalog::Missions, id, &mut wallet).unwrap();
                claimed.push(id);
            }
            for &id in &claimed {
                prop_assert_eq!(
                    progression.try_claim(GoalCatalog::Missions, id, &mut wallet),
                    Err(EconomyError::AlreadyClaimed)
                );
            }
        }
    }
}
