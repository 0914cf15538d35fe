//! Table Analysis
//!
//! Isolated-drive studies and per-style breakdowns of simulated games.

use clap::{Parser, Subcommand};
use gridiron_dice::analysis::{simulate_games, start_position_report, study_drives_with, style_report};
use gridiron_dice::core::config::rules;
use gridiron_dice::core::types::PlayStyle;
use gridiron_dice::policy::{load_coach, CoachProfile};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(about = "Study drive outcomes by style, start position and game situation")]
struct Args {
    #[command(subcommand)]
    study: Study,

    /// Random seed for deterministic runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Coach profile name (loaded from data/coaches/)
    #[arg(long, global = true, default_value = "default")]
    coach: String,
}

#[derive(Subcommand, Debug)]
enum Study {
    /// Possessions from a fixed spot, one style at a time
    Drives {
        /// Possessions per style
        #[arg(long, default_value_t = 10_000)]
        possessions: usize,

        /// Start, in yards from the offense's own goal (defaults to the kickoff spot)
        #[arg(long)]
        start: Option<i32>,

        /// Only this style (run, balanced, pass)
        #[arg(long)]
        style: Option<PlayStyle>,
    },
    /// Touchdown and turnover rates by style in full games
    Styles {
        #[arg(long, default_value_t = 1000)]
        games: usize,
    },
    /// Points per drive by starting field position in full games
    Positions {
        #[arg(long, default_value_t = 1000)]
        games: usize,
    },
}

fn emit<T: Serialize>(format: &str, value: &T, text: String) {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
    } else {
        println!("{}", text);
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridiron_dice=info")))
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let coach = load_coach(&args.coach).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load coach '{}': {}", args.coach, e);
        eprintln!("Using default coach");
        CoachProfile::default()
    });

    match args.study {
        Study::Drives {
            possessions,
            start,
            style,
        } => {
            let start = start.unwrap_or(rules().kickoff_yard_line);
            let styles: Vec<PlayStyle> = match style {
                Some(style) => vec![style],
                None => PlayStyle::ALL.to_vec(),
            };
            let studies: Vec<_> = styles
                .into_iter()
                .map(|style| study_drives_with(&coach, style, start, possessions, seed))
                .collect();
            let text = studies
                .iter()
                .map(|study| study.summary())
                .collect::<Vec<_>>()
                .join("\n");
            emit(&args.format, &studies, text);
        }
        Study::Styles { games } => match simulate_games(&coach, games, seed) {
            Ok(results) => {
                let report = style_report(&results);
                let text = report.summary();
                emit(&args.format, &report, text);
            }
            Err(e) => {
                eprintln!("Simulation failed: {}", e);
                std::process::exit(1);
            }
        },
        Study::Positions { games } => match simulate_games(&coach, games, seed) {
            Ok(results) => {
                let report = start_position_report(&results);
                let text = report.summary();
                emit(&args.format, &report, text);
            }
            Err(e) => {
                eprintln!("Simulation failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}
