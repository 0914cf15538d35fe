//! Gridiron Dice - Terminal Game
//!
//! Hot-seat play for two people at one keyboard, or one person against the
//! computer coach. Runs the same session machinery a chat front end would.

use std::io::{self, Write};

use clap::Parser;
use gridiron_dice::core::types::{PlayStyle, Team};
use gridiron_dice::drive::DriveLog;
use gridiron_dice::field;
use gridiron_dice::policy::{load_coach, CoachProfile, ConversionKind};
use gridiron_dice::report::{drive_chart, field_label};
use gridiron_dice::session::{
    CoachSubmitter, Effects, GameSession, HumanSubmitter, Move, PhaseKind, Player, SessionError, SessionStore,
};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

const CHANNEL: u64 = 0;
const BOMBERS_PLAYER: u64 = 1;
const GUNNERS_PLAYER: u64 = 2;

/// Play a game of dice football at the terminal
#[derive(Parser, Debug)]
#[command(name = "gridiron")]
#[command(about = "Play dice football hot-seat or against the computer")]
struct Args {
    /// Let the computer coach the Gunners
    #[arg(long)]
    cpu: bool,

    /// Computer coach profile (loaded from data/coaches/)
    #[arg(long, default_value = "default")]
    coach: String,

    /// Random seed for a repeatable game
    #[arg(long)]
    seed: Option<u64>,

    /// Print the drive chart when the game ends
    #[arg(long)]
    chart: bool,
}

/// A line of input from the player
enum Command {
    Play(Move),
    Status,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    let command = match input.to_ascii_lowercase().as_str() {
        "run" | "r" => Command::Play(Move::Style(PlayStyle::Run)),
        "balanced" | "b" => Command::Play(Move::Style(PlayStyle::Balanced)),
        "pass" | "p" => Command::Play(Move::Style(PlayStyle::Pass)),
        "go" | "g" => Command::Play(Move::GoForIt),
        "fg" | "kick" => Command::Play(Move::FieldGoal),
        "punt" => Command::Play(Move::Punt),
        "kneel" | "end" => Command::Play(Move::EndHalf),
        "1pt" | "1" => Command::Play(Move::ExtraPoint(ConversionKind::OnePoint)),
        "2pt" | "2" => Command::Play(Move::ExtraPoint(ConversionKind::TwoPoint)),
        "status" | "s" => Command::Status,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridiron_dice=info")))
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let gunners = if args.cpu {
        Player::Computer
    } else {
        Player::Human(GUNNERS_PLAYER)
    };

    let coach = load_coach(&args.coach).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load coach '{}': {}", args.coach, e);
        eprintln!("Using default coach");
        CoachProfile::default()
    });
    let mut computer = CoachSubmitter::new(coach, seed.wrapping_add(1));

    let rt = Runtime::new()?;
    let store = SessionStore::new();
    let shared = store.create(CHANNEL, GameSession::new(Player::Human(BOMBERS_PLAYER), gunners, seed)?)?;

    println!("\n=== GRIDIRON DICE ===");
    println!("Bombers vs Gunners (seed {})", seed);
    print_help();

    loop {
        if rt.block_on(shared.lock()).is_finished() {
            break;
        }

        // Computer possessions play out without input
        let computer_moves = {
            let mut session = rt.block_on(shared.lock());
            computer.take_turns(&mut session)?
        };
        for effects in &computer_moves {
            report_effects("Computer", effects);
        }
        if computer_moves.iter().any(|e| e.game_over) {
            break;
        }

        let (acting, phase) = {
            let session = rt.block_on(shared.lock());
            print_prompt(&session);
            (session.acting_team(), session.phase().kind())
        };
        print!("{} ({})> ", acting, phase_hint(phase));
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mv = match parse_command(input) {
            Some(Command::Play(mv)) => mv,
            Some(Command::Status) => {
                print_status(&rt.block_on(shared.lock()));
                continue;
            }
            Some(Command::Help) => {
                print_help();
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                println!("Unknown command: {} (type 'help')", input);
                continue;
            }
        };

        let player = match acting {
            Team::Bombers => BOMBERS_PLAYER,
            Team::Gunners => GUNNERS_PLAYER,
        };
        let mut human = HumanSubmitter::new(player);
        match rt.block_on(store.submit(CHANNEL, &mut human, mv)) {
            Ok(effects) => {
                report_effects(&acting.to_string(), &effects);
                if effects.game_over {
                    break;
                }
            }
            Err(SessionError::Engine(e)) => return Err(e.into()),
            Err(e) => println!("{}", e),
        }
    }

    let session = rt.block_on(shared.lock());
    println!("\n=== FINAL ===");
    println!("{}", session.score());
    if args.chart {
        println!();
        let mut result = session.result();
        result.seed = Some(seed);
        println!("{}", drive_chart(&result));
    }

    Ok(())
}

fn phase_hint(phase: PhaseKind) -> &'static str {
    match phase {
        PhaseKind::AwaitingStyle => "run/balanced/pass",
        PhaseKind::FourthDown => "go/fg/punt",
        PhaseKind::UntimedDown => "go/fg/kneel",
        PhaseKind::ExtraPoint => "1pt/2pt",
        PhaseKind::Finished => "game over",
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  run / balanced / pass  - Pick the drive style");
    println!("  go                     - Go for it on fourth down or the untimed down");
    println!("  fg                     - Kick a field goal (50 yards or less)");
    println!("  punt                   - Punt on fourth down");
    println!("  kneel                  - Let the half end instead of running the untimed down");
    println!("  1pt / 2pt              - Try after a touchdown");
    println!("  status                 - Show the score and every drive so far");
    println!("  quit                   - Exit");
    println!();
}

fn print_prompt(session: &GameSession) {
    let team = session.possession();
    println!(
        "\n{} | {} {} | {} ball",
        session.score(),
        session.half(),
        session.clock(),
        team
    );
    match session.phase().drive() {
        Some(drive) => println!(
            "Ball on the {} ({} to goal)",
            field_label(team, drive.end),
            drive.yards_to_goal()
        ),
        None => println!(
            "Ball on the {} ({} to goal)",
            field_label(team, session.spot()),
            field::yards_to_goal(team, session.spot())
        ),
    }
}

fn print_status(session: &GameSession) {
    println!("\n{} | {} {}", session.score(), session.half(), session.clock());
    for (i, log) in session.drives().iter().enumerate() {
        print_drive(i + 1, log);
    }
}

fn print_drive(number: usize, log: &DriveLog) {
    println!(
        "  #{:<3} {} {:<8} {} -> {}: {}",
        number,
        log.team,
        log.style,
        field_label(log.team, log.start),
        field_label(log.team, log.end),
        log.result()
    );
}

fn report_effects(who: &str, effects: &Effects) {
    if let Some(drive) = &effects.drive {
        if effects.log.is_none() {
            println!(
                "{}: rolled {} for {} yards, {} blocks. Ball on the {}.",
                who,
                drive.roll,
                drive.yards,
                drive.time_blocks,
                field_label(drive.team(), drive.end)
            );
        }
    }
    if let Some(to_go) = effects.to_go {
        println!("  {}", to_go);
    }
    match effects.phase {
        PhaseKind::UntimedDown => println!("  Time has expired. One untimed down."),
        PhaseKind::ExtraPoint => println!("  TOUCHDOWN! Choose the try."),
        _ => {}
    }
    if let Some(log) = &effects.log {
        println!(
            "{}: {} {} -> {} | {}",
            who,
            log.style,
            field_label(log.team, log.start),
            field_label(log.team, log.end),
            log.result()
        );
        println!("  {}", effects.score);
    }
    if effects.half_ended && !effects.game_over {
        println!("\n--- Halftime: {} ---", effects.score);
    }
}
