//! Headless Game Simulator
//!
//! Plays batches of computer-vs-computer games and prints a summary.

use clap::Parser;
use gridiron_dice::analysis::{simulate_many_with, BatchSummary};
use gridiron_dice::game::simulate_game_with;
use gridiron_dice::core::config::{install_rules, load_rules_from};
use gridiron_dice::core::dice;
use gridiron_dice::policy::{load_coach, CoachProfile};
use gridiron_dice::report::drive_chart;
use tracing_subscriber::EnvFilter;

/// Headless Game Simulator - batch statistics for tuning the tables
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Simulate full games and report score and drive statistics")]
struct Args {
    /// Number of games to simulate
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Coach profile name (loaded from data/coaches/)
    #[arg(long, default_value = "default")]
    coach: String,

    /// Rules file overriding the default constants
    #[arg(long)]
    rules: Option<std::path::PathBuf>,

    /// Print the drive chart of a single game instead of batch statistics
    #[arg(long)]
    chart: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridiron_dice=info")))
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &args.rules {
        if let Err(e) = load_rules_from(path).and_then(install_rules) {
            eprintln!("Failed to load rules {:?}: {}", path, e);
            std::process::exit(1);
        }
    }

    let seed = args.seed.unwrap_or_else(rand::random);

    let coach = load_coach(&args.coach).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load coach '{}': {}", args.coach, e);
        eprintln!("Using default coach");
        CoachProfile::default()
    });

    if args.chart {
        let mut rng = dice::seeded(seed);
        match simulate_game_with(&coach, &mut rng) {
            Ok(mut game) => {
                game.seed = Some(seed);
                if args.format == "json" {
                    println!("{}", serde_json::to_string_pretty(&game).unwrap_or_default());
                } else {
                    println!("{}", drive_chart(&game));
                }
            }
            Err(e) => {
                eprintln!("Simulation failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    tracing::info!("Simulating {} games with coach '{}' (seed {})", args.games, coach.name, seed);
    let summary: BatchSummary = match simulate_many_with(&coach, args.games, seed) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.format == "json" {
        println!("{}", summary.to_json());
    } else {
        println!("{}", summary.summary());
    }
}
