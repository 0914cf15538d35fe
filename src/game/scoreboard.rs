//! Points per team

use serde::{Deserialize, Serialize};

use crate::core::types::Team;
use crate::drive::DriveLog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    pub bombers: u32,
    pub gunners: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::Bombers => self.bombers,
            Team::Gunners => self.gunners,
        }
    }

    pub fn add(&mut self, team: Team, points: u32) {
        match team {
            Team::Bombers => self.bombers += points,
            Team::Gunners => self.gunners += points,
        }
    }

    /// `team`'s points minus its opponent's
    pub fn lead(&self, team: Team) -> i32 {
        self.get(team) as i32 - self.get(team.opponent()) as i32
    }

    /// Credit a finished drive's points
    pub fn record(&mut self, log: &DriveLog) {
        if log.points > 0 {
            self.add(log.scoring_team(), log.points);
        }
    }

    pub fn total(&self) -> u32 {
        self.bombers + self.gunners
    }

    /// Leading team, or None when tied
    pub fn leader(&self) -> Option<Team> {
        match self.lead(Team::Bombers) {
            lead if lead > 0 => Some(Team::Bombers),
            lead if lead < 0 => Some(Team::Gunners),
            _ => None,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bombers {} - Gunners {}", self.bombers, self.gunners)
    }
}
