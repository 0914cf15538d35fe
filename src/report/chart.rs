//! Markdown drive chart for one game

use std::fmt::Write;

use crate::core::types::{Half, Team, Yard};
use crate::field::yards_from_own_goal;
use crate::game::{GameResult, Scoreboard};

/// "own 30", "opp 45", "50"
pub fn field_label(team: Team, x: Yard) -> String {
    match yards_from_own_goal(team, x) {
        50 => "50".to_string(),
        own if own < 50 => format!("own {}", own),
        own => format!("opp {}", 100 - own),
    }
}

pub fn drive_chart(game: &GameResult) -> String {
    let mut out = String::new();
    let mut running = Scoreboard::new();
    let mut current_half = None;

    // Writing to a String cannot fail
    let _ = writeln!(out, "# Drive Chart\n");
    if let Some(seed) = game.seed {
        let _ = writeln!(out, "Seed: {}\n", seed);
    }
    let _ = writeln!(out, "**Final:** {}\n", game.score);

    for (number, log) in game.drives.iter().enumerate() {
        if current_half != Some(log.half) {
            current_half = Some(log.half);
            let _ = writeln!(out, "## {}\n", log.half);
        }
        running.record(log);

        let _ = writeln!(
            out,
            "### Drive {}: {} ({})\n",
            number + 1,
            log.team,
            log.style.label()
        );
        let _ = writeln!(
            out,
            "- **Start:** {} | **Roll:** {} | **Yards:** {} | **Time:** {} blocks",
            field_label(log.team, log.start),
            log.roll,
            log.yards,
            log.time_blocks
        );
        let rolls: Vec<String> = log
            .dice
            .iter()
            .map(|r| format!("{} d{}={}", r.purpose.label(), r.sides, r.value))
            .collect();
        if !rolls.is_empty() {
            let _ = writeln!(out, "- **Dice:** {}", rolls.join(", "));
        }
        let _ = writeln!(
            out,
            "- **End:** {} | **Result:** {} | **Points:** {}",
            field_label(log.team, log.end),
            log.result(),
            log.points
        );
        let _ = writeln!(out, "- **Score:** {}\n", running);
    }

    let _ = writeln!(out, "## Summary\n");
    for half in [Half::First, Half::Second] {
        let _ = writeln!(out, "- {}: {} drives", half, game.drives_in(half).count());
    }
    match game.winner() {
        Some(team) => {
            let _ = writeln!(out, "- Winner: {} by {}", team, game.margin());
        }
        None => {
            let _ = writeln!(out, "- Tie game");
        }
    }

    out
}
