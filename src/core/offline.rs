//! Offline income.
//!
//! Pays a reduced share of idle income for wall-clock time spent away,
//! capped at one week.

use super::balance::{MAX_OFFLINE_SECONDS, OFFLINE_MULTIPLIER};

/// Report of offline progression results
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OfflineReport {
    pub elapsed_seconds: i64,
    /// Seconds actually paid for, after the cap.
    pub credited_seconds: i64,
    pub gold_earned: u64,
    pub yield_per_second: u64,
}

/// Gold earned for `elapsed_seconds` away at `yield_per_second`.
pub fn calculate_offline_income(yield_per_second: u64, elapsed_seconds: i64) -> u64 {
    if elapsed_seconds <= 0 {
        return 0;
    }
    let capped = elapsed_seconds.min(MAX_OFFLINE_SECONDS);
    (yield_per_second as f64 * capped as f64 * OFFLINE_MULTIPLIER).floor() as u64
}

pub fn offline_report(yield_per_second: u64, elapsed_seconds: i64) -> OfflineReport {
    OfflineReport {
        elapsed_seconds,
        credited_seconds: elapsed_seconds.clamp(0, MAX_OFFLINE_SECONDS),
        gold_earned: calculate_offline_income(yield_per_second, elapsed_seconds),
        yield_per_second,
    }
}
