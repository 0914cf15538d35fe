use serde::{Deserialize, Serialize};

use crate::core::types::{GameId, Half, Team};
use crate::drive::DriveLog;
use crate::game::scoreboard::Scoreboard;

/// A complete game: every drive in order and the final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub id: GameId,
    /// Seed the game was played from, when it came from one
    pub seed: Option<u64>,
    pub drives: Vec<DriveLog>,
    pub score: Scoreboard,
}

impl GameResult {
    /// Winning team, or None for a tie
    pub fn winner(&self) -> Option<Team> {
        self.score.leader()
    }

    /// Absolute point difference
    pub fn margin(&self) -> u32 {
        self.score.lead(Team::Bombers).unsigned_abs()
    }

    pub fn drives_in(&self, half: Half) -> impl Iterator<Item = &DriveLog> {
        self.drives.iter().filter(move |d| d.half == half)
    }
}
