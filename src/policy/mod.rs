//! Computer-coach decisions
//!
//! Every decision is a weighted draw against a uniform sample from the
//! game's dice, so a seeded game replays the same calls.

pub mod coach;
pub mod extra_point;
pub mod fourth_down;
pub mod style;
pub mod untimed;

pub use coach::{coach_path, load_coach, load_coach_from, CoachProfile};
pub use extra_point::{choose_conversion, two_point_probability};
pub use fourth_down::{choose_fourth_down_call, go_for_it_probability, should_go_for_it};
pub use style::{choose_style, style_weights};
pub use untimed::{choose_untimed_call, untimed_mix};

use serde::{Deserialize, Serialize};

use crate::core::config::rules;
use crate::core::types::{Block, Half};

/// Score and clock as seen by the offense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSituation {
    pub half: Half,
    pub blocks_left: Block,
    /// Offense points minus defense points
    pub lead: i32,
}

impl GameSituation {
    pub fn new(half: Half, blocks_left: Block, lead: i32) -> Self {
        Self {
            half,
            blocks_left,
            lead,
        }
    }

    /// Inside the last ten minutes of either half
    pub fn is_late(&self) -> bool {
        self.blocks_left <= rules().late_half_blocks
    }

    /// Inside the last five minutes of the game
    pub fn is_final_minutes(&self) -> bool {
        self.half == Half::Second && self.blocks_left <= rules().final_minutes_blocks
    }
}

/// Call made on fourth down when the drive did not score or turn over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FourthDownCall {
    GoForIt,
    FieldGoal,
    Punt,
}

/// Call made on the untimed final down of a half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UntimedCall {
    EndHalf,
    FieldGoal,
    GoForIt,
}

/// Try after a touchdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionKind {
    /// Kick, rolled on the field-goal table
    OnePoint,
    /// d10 try
    TwoPoint,
}

impl ConversionKind {
    pub fn points(self) -> u32 {
        match self {
            ConversionKind::OnePoint => 1,
            ConversionKind::TwoPoint => 2,
        }
    }
}

/// Walk `weights` cumulatively and return the first entry the sample falls under
pub(crate) fn pick_weighted<T: Copy>(weights: &[(T, f64)], sample: f64) -> Option<T> {
    let mut cumulative = 0.0;
    for &(choice, weight) in weights {
        cumulative += weight;
        if sample <= cumulative {
            return Some(choice);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_weighted_is_cumulative() {
        let weights = [('a', 0.5), ('b', 0.3), ('c', 0.2)];
        assert_eq!(pick_weighted(&weights, 0.0), Some('a'));
        assert_eq!(pick_weighted(&weights, 0.5), Some('a'));
        assert_eq!(pick_weighted(&weights, 0.51), Some('b'));
        assert_eq!(pick_weighted(&weights, 0.95), Some('c'));
    }

    #[test]
    fn test_pick_weighted_can_fall_through() {
        let weights = [('a', 0.2), ('b', 0.2)];
        assert_eq!(pick_weighted(&weights, 0.9), None);
    }

    #[test]
    fn test_late_thresholds() {
        assert!(GameSituation::new(Half::First, 60, 0).is_late());
        assert!(!GameSituation::new(Half::First, 61, 0).is_late());
        assert!(!GameSituation::new(Half::First, 20, 0).is_final_minutes());
        assert!(GameSituation::new(Half::Second, 30, 0).is_final_minutes());
    }
}
