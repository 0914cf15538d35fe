//! One half of play

use serde::{Deserialize, Serialize};

use crate::core::dice::Dice;
use crate::core::error::Result;
use crate::core::types::{Block, Half, Team, Yard};
use crate::drive::{resolve_drive, DriveLog, Possession};
use crate::game::clock::Clock;
use crate::game::scoreboard::Scoreboard;
use crate::policy::{choose_style, CoachProfile, GameSituation};

/// Drives of one half and where the ball would go next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfResult {
    pub half: Half,
    pub drives: Vec<DriveLog>,
    pub next_team: Team,
    pub next_position: Yard,
    pub blocks_used: Block,
}

/// Play drives until the clock runs out or a drive ends the half
///
/// `score` carries over between halves and is updated as each drive finishes.
pub fn simulate_half<D: Dice + ?Sized>(
    start_team: Team,
    start_position: Yard,
    score: &mut Scoreboard,
    half: Half,
    coach: &CoachProfile,
    dice: &mut D,
) -> Result<HalfResult> {
    let mut clock = Clock::full_half();
    let mut team = start_team;
    let mut position = start_position;
    let mut drives = Vec::new();

    while !clock.is_expired() {
        let situation = GameSituation::new(half, clock.remaining(), score.lead(team));
        let style = choose_style(coach, &situation, dice);
        let possession = Possession {
            half,
            team,
            start: position,
            style,
            blocks_left: clock.remaining(),
        };

        let resolution = resolve_drive(possession, score, coach, dice);
        clock.spend(resolution.time_spent)?;
        if resolution.ends_half {
            clock.expire();
        }

        team = resolution.next_team;
        position = resolution.next_position;
        drives.push(resolution.log);
    }

    tracing::debug!(
        "{} complete: {} drives, {}",
        half,
        drives.len(),
        score
    );

    Ok(HalfResult {
        half,
        drives,
        next_team: team,
        next_position: position,
        blocks_used: clock.used(),
    })
}
