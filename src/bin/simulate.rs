//! Economy balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 100 one-hour tap sessions
//!   cargo run --bin simulate -- -a dodge -n 500     # 500 dodge sessions
//!   cargo run --bin simulate -- --seed 42           # Reproducible run

use std::env;
use tapquest::activity::ActivityKind;
use tapquest::simulator::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              TAPQUEST ECONOMY SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Activity:       {}", config.activity.name());
    println!("  Seconds/Run:    {}", config.seconds_per_run);
    println!("  Actions/Second: {}", config.actions_per_second);
    println!("  Skill:          {:.0}%", config.skill * 100.0);
    println!("  Buy Upgrades:   {}", config.buy_upgrades);
    println!("  Consumables:    {}", config.use_consumables);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_activity(name: &str) -> Option<ActivityKind> {
    ActivityKind::ALL
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(name))
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-a" | "--activity" => {
                if i + 1 < args.len() {
                    config.activity = parse_activity(&args[i + 1]).unwrap_or(config.activity);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds_per_run = args[i + 1].parse().unwrap_or(3_600);
                    i += 1;
                }
            }
            "--aps" => {
                if i + 1 < args.len() {
                    config.actions_per_second = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--skill" => {
                if i + 1 < args.len() {
                    config.skill = args[i + 1].parse().unwrap_or(0.8);
                    i += 1;
                }
            }
            "--no-upgrades" => {
                config.buy_upgrades = false;
            }
            "--no-consumables" => {
                config.use_consumables = false;
            }
            "--no-claims" => {
                config.claim_goals = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick(config.activity);
            }
            "--hoard" => {
                config = SimConfig::hoarder(config.activity);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Tapquest Economy Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated players (default: 100)");
    println!("    -a, --activity <A>    tap, dodge, stacking or language (default: tap)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --seconds <T>     Simulated seconds per run (default: 3600)");
    println!("    --aps <N>             Actions per second (default: 3)");
    println!("    --skill <P>           Chance of a good outcome, 0-1 (default: 0.8)");
    println!("    --no-upgrades         Never buy skills, equipment or housing");
    println!("    --no-consumables      Never buy or use consumables");
    println!("    --no-claims           Never claim goals");
    println!("    -v, --verbose         Print every run");
    println!("    --json                Save JSON report");
    println!("    --quick               20 ten-minute runs");
    println!("    --hoard               Never spend (raw earning rate)");
    println!("    -h, --help            Show this help");
}
