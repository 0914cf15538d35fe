//! Core type definitions used throughout the codebase

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::GridironError;

/// Absolute field coordinate.
///
/// 0 is the Bombers' goal line and 100 is the Gunners' goal line. Signed so
/// that an unclamped advance can run past either end before it is checked.
pub type Yard = i32;

/// Discrete unit of game clock (10 seconds of game time)
pub type Block = u32;

/// Unique identifier for a simulated or interactive game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the two sides. Each side's direction of advance is fixed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// Defends x=0, attacks toward x=100
    #[display(fmt = "Bombers")]
    Bombers,
    /// Defends x=100, attacks toward x=0
    #[display(fmt = "Gunners")]
    Gunners,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Bombers, Team::Gunners];

    pub fn opponent(self) -> Team {
        match self {
            Team::Bombers => Team::Gunners,
            Team::Gunners => Team::Bombers,
        }
    }

    /// Sign applied to gained yardage
    pub fn direction(self) -> Yard {
        match self {
            Team::Bombers => 1,
            Team::Gunners => -1,
        }
    }

    /// Coordinate of the goal line this team defends
    pub fn own_goal(self) -> Yard {
        match self {
            Team::Bombers => 0,
            Team::Gunners => 100,
        }
    }

    /// Convert a yard line measured from this team's own goal into an absolute coordinate
    pub fn own_yard_line(self, yards_from_own_goal: Yard) -> Yard {
        self.own_goal() + self.direction() * yards_from_own_goal
    }
}

impl FromStr for Team {
    type Err = GridironError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bombers" => Ok(Team::Bombers),
            "gunners" => Ok(Team::Gunners),
            _ => Err(GridironError::UnknownTeam(s.to_string())),
        }
    }
}

/// Offensive style chosen for a drive
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayStyle {
    #[display(fmt = "run")]
    Run,
    #[display(fmt = "balanced")]
    Balanced,
    #[display(fmt = "pass")]
    Pass,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 3] = [PlayStyle::Run, PlayStyle::Balanced, PlayStyle::Pass];

    /// Label used on play aids and exported tables
    pub fn label(self) -> &'static str {
        match self {
            PlayStyle::Run => "Run-First",
            PlayStyle::Balanced => "Balanced",
            PlayStyle::Pass => "Pass-First",
        }
    }

    /// Die rolled for fourth-down distance after a drive of 10+ yards
    pub fn to_go_die(self) -> u32 {
        match self {
            PlayStyle::Run => 8,
            PlayStyle::Balanced => 10,
            PlayStyle::Pass => 20,
        }
    }
}

impl FromStr for PlayStyle {
    type Err = GridironError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "run" | "run-first" | "run_first" => Ok(PlayStyle::Run),
            "balanced" => Ok(PlayStyle::Balanced),
            "pass" | "pass-first" | "pass_first" => Ok(PlayStyle::Pass),
            _ => Err(GridironError::UnknownStyle(s.to_string())),
        }
    }
}

/// Half of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Half {
    First,
    Second,
}

impl Half {
    pub fn number(self) -> u8 {
        match self {
            Half::First => 1,
            Half::Second => 2,
        }
    }

    pub fn next(self) -> Option<Half> {
        match self {
            Half::First => Some(Half::Second),
            Half::Second => None,
        }
    }
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Half::First => write!(f, "1st Half"),
            Half::Second => write!(f, "2nd Half"),
        }
    }
}
