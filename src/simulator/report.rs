//! Simulation report generation.

use serde::Serialize;

/// Outcome of one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub seconds: u64,
    pub gold_earned: u64,
    pub gold_lost: u64,
    pub final_gold: u64,
    pub skill_levels_bought: u64,
    pub equipment_attempts: u64,
    pub equipment_successes: u64,
    pub house_tier: u8,
    pub goals_claimed: u64,
    pub fever_peaks: u64,
    /// Seconds spent above the lowest fever tier.
    pub fever_seconds: u64,
    /// Engine calls that returned an error.
    pub rejected_calls: u64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    pub avg_gold_earned: f64,
    pub avg_gold_per_second: f64,
    pub avg_gold_lost: f64,
    pub avg_final_gold: f64,

    pub avg_skill_levels: f64,
    pub avg_equipment_attempts: f64,
    pub avg_equipment_successes: f64,
    /// Successes over attempts across every run.
    pub equipment_success_rate: f64,
    pub avg_house_tier: f64,

    pub avg_goals_claimed: f64,
    pub avg_fever_peaks: f64,
    /// Share of simulated time spent above the lowest fever tier.
    pub fever_uptime: f64,
    pub avg_rejected_calls: f64,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let attempts: u64 = runs.iter().map(|r| r.equipment_attempts).sum();
        let successes: u64 = runs.iter().map(|r| r.equipment_successes).sum();
        let seconds: u64 = runs.iter().map(|r| r.seconds).sum();
        let fever_seconds: u64 = runs.iter().map(|r| r.fever_seconds).sum();

        Self {
            num_runs: runs.len() as u32,
            avg_gold_earned: average(&runs, |r| r.gold_earned as f64),
            avg_gold_per_second: average(&runs, |r| ratio(r.gold_earned, r.seconds)),
            avg_gold_lost: average(&runs, |r| r.gold_lost as f64),
            avg_final_gold: average(&runs, |r| r.final_gold as f64),
            avg_skill_levels: average(&runs, |r| r.skill_levels_bought as f64),
            avg_equipment_attempts: average(&runs, |r| r.equipment_attempts as f64),
            avg_equipment_successes: average(&runs, |r| r.equipment_successes as f64),
            equipment_success_rate: ratio(successes, attempts),
            avg_house_tier: average(&runs, |r| r.house_tier as f64),
            avg_goals_claimed: average(&runs, |r| r.goals_claimed as f64),
            avg_fever_peaks: average(&runs, |r| r.fever_peaks as f64),
            fever_uptime: ratio(fever_seconds, seconds),
            avg_rejected_calls: average(&runs, |r| r.rejected_calls as f64),
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str("── EARNINGS ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Gold Earned:     {:.0}\n",
            self.avg_gold_earned
        ));
        report.push_str(&format!(
            "  Avg Gold / Second:   {:.2}\n",
            self.avg_gold_per_second
        ));
        report.push_str(&format!("  Avg Gold Lost:       {:.0}\n", self.avg_gold_lost));
        report.push_str(&format!(
            "  Avg Final Balance:   {:.0}\n\n",
            self.avg_final_gold
        ));

        report.push_str("── UPGRADES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Skill Levels:    {:.1}\n",
            self.avg_skill_levels
        ));
        report.push_str(&format!(
            "  Equipment Attempts:  {:.1} ({:.1} succeeded, {:.1}%)\n",
            self.avg_equipment_attempts,
            self.avg_equipment_successes,
            self.equipment_success_rate * 100.0
        ));
        report.push_str(&format!(
            "  Avg House Tier:      {:.2}\n\n",
            self.avg_house_tier
        ));

        report.push_str("── ENGAGEMENT ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Goals Claimed:   {:.1}\n",
            self.avg_goals_claimed
        ));
        report.push_str(&format!(
            "  Avg Fever Peaks:     {:.1}\n",
            self.avg_fever_peaks
        ));
        report.push_str(&format!(
            "  Fever Uptime:        {:.1}%\n",
            self.fever_uptime * 100.0
        ));
        report.push_str(&format!(
            "  Avg Rejected Calls:  {:.1}\n",
            self.avg_rejected_calls
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(gold: u64, attempts: u64, successes: u64) -> RunStats {
        RunStats {
            seconds: 100,
            gold_earned: gold,
            equipment_attempts: attempts,
            equipment_successes: successes,
            fever_seconds: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_averages_and_rates() {
        let report = SimReport::from_runs(vec![run(100, 3, 1), run(300, 1, 1)]);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.avg_gold_earned, 200.0);
        assert_eq!(report.avg_gold_per_second, 2.0);
        assert_eq!(report.equipment_success_rate, 0.5);
        assert_eq!(report.fever_uptime, 0.5);
    }

    #[test]
    fn test_empty_report_has_no_nan() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.avg_gold_earned, 0.0);
        assert_eq!(report.equipment_success_rate, 0.0);
        assert!(report.to_text().contains("Runs: 0"));
    }

    #[test]
    fn test_json_skips_run_list() {
        let report = SimReport::from_runs(vec![run(10, 0, 0)]);
        let json = report.to_json();
        assert!(json.contains("avg_gold_earned"));
        assert!(!json.contains("run_stats"));
    }
}
