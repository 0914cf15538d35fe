//! Printable table exports

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridiron_dice::core::error::Result;
use gridiron_dice::game::simulate_game;
use gridiron_dice::report::{drive_chart, play_aid, write_special_teams_csv, write_tables_csv};

#[derive(Parser, Debug)]
#[command(name = "export")]
#[command(about = "Write the drive tables, play aid or a sample drive chart")]
struct Args {
    #[command(subcommand)]
    what: Export,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o', global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Export {
    /// Drive tables as CSV
    Csv {
        /// Fourth-down and field-goal tables instead of the drive tables
        #[arg(long)]
        special_teams: bool,
    },
    /// Markdown play aid
    PlayAid,
    /// Markdown drive chart of one simulated game
    Chart {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn open(output: &Option<PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut out = open(&args.output)?;

    match args.what {
        Export::Csv { special_teams: false } => write_tables_csv(out)?,
        Export::Csv { special_teams: true } => write_special_teams_csv(out)?,
        Export::PlayAid => out.write_all(play_aid().as_bytes())?,
        Export::Chart { seed } => {
            let game = simulate_game(seed)?;
            out.write_all(drive_chart(&game).as_bytes())?;
        }
    }

    Ok(())
}
