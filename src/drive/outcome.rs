//! Drive records

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::dice::RollRecord;
use crate::core::types::{Block, Half, PlayStyle, Team, Yard};
use crate::policy::ConversionKind;

/// Distance needed on fourth down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToGo {
    Yards(Yard),
    /// Fourth and goal from this many yards out
    Goal(Yard),
}

impl ToGo {
    pub fn yards(self) -> Yard {
        match self {
            ToGo::Yards(n) | ToGo::Goal(n) => n,
        }
    }

    pub fn is_goal(self) -> bool {
        matches!(self, ToGo::Goal(_))
    }
}

impl fmt::Display for ToGo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToGo::Yards(n) => write!(f, "4th and {}", n),
            ToGo::Goal(n) => write!(f, "4th and goal from the {}", n),
        }
    }
}

/// Result of the try after a touchdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub kind: ConversionKind,
    pub good: bool,
}

impl ConversionResult {
    pub fn points(self) -> u32 {
        if self.good {
            self.kind.points()
        } else {
            0
        }
    }
}

/// How a drive ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveOutcome {
    /// Offense downed in its own end zone; two points to the defense
    Safety { via_fourth_down: bool },
    /// Possession lost. A negated touchdown gives the defense the ball at its own 20.
    Turnover { negated_touchdown: bool },
    Touchdown {
        conversion: ConversionResult,
        via_fourth_down: bool,
    },
    FieldGoal { made: bool, distance: Yard },
    Punt,
    /// Fourth-down attempt that did not score. Converted keeps the ball.
    FourthDown { converted: bool, to_go: ToGo },
    /// Clock ran out without a score
    HalfExpired,
}

impl DriveOutcome {
    /// Points the drive put on the board (for whichever side scored)
    pub fn points(&self) -> u32 {
        match *self {
            DriveOutcome::Safety { .. } => 2,
            DriveOutcome::FieldGoal { made: true, .. } => 3,
            DriveOutcome::Touchdown { conversion, .. } => 6 + conversion.points(),
            _ => 0,
        }
    }

    pub fn is_touchdown(&self) -> bool {
        matches!(self, DriveOutcome::Touchdown { .. })
    }

    /// Whether the offense keeps the ball for another drive
    pub fn keeps_possession(&self) -> bool {
        matches!(self, DriveOutcome::FourthDown { converted: true, .. })
    }

    fn describe(&self) -> String {
        match *self {
            DriveOutcome::Safety {
                via_fourth_down: false,
            } => "Safety".to_string(),
            DriveOutcome::Safety {
                via_fourth_down: true,
            } => "4th down Safety".to_string(),
            DriveOutcome::Turnover {
                negated_touchdown: false,
            } => "Turnover".to_string(),
            DriveOutcome::Turnover {
                negated_touchdown: true,
            } => "Turnover (would be TD)".to_string(),
            DriveOutcome::Touchdown {
                conversion,
                via_fourth_down,
            } => {
                let prefix = if via_fourth_down { "4th down TD" } else { "TD" };
                match (conversion.kind, conversion.good) {
                    (ConversionKind::OnePoint, true) => format!("{}+1pt", prefix),
                    (ConversionKind::TwoPoint, true) => format!("{}+2pt", prefix),
                    (ConversionKind::OnePoint, false) => format!("{} (XP missed)", prefix),
                    (ConversionKind::TwoPoint, false) => format!("{} (2pt failed)", prefix),
                }
            }
            DriveOutcome::FieldGoal { made: true, .. } => "FG Good".to_string(),
            DriveOutcome::FieldGoal { made: false, .. } => "FG Miss".to_string(),
            DriveOutcome::Punt => "Punt".to_string(),
            DriveOutcome::FourthDown { converted, to_go } => {
                let verb = if converted { "conversion" } else { "failed" };
                match to_go {
                    ToGo::Goal(_) => format!("4th down {} (goal)", verb),
                    ToGo::Yards(n) => format!("4th down {} ({})", verb, n),
                }
            }
            DriveOutcome::HalfExpired => "Half Ends".to_string(),
        }
    }
}

/// One resolved drive. Created once and never changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveLog {
    pub half: Half,
    pub team: Team,
    pub start: Yard,
    pub style: PlayStyle,
    /// Drive-table roll (1-20)
    pub roll: u32,
    pub yards: Yard,
    pub time_blocks: Block,
    /// Ball spot when the drive ended
    pub end: Yard,
    pub outcome: DriveOutcome,
    pub points: u32,
    /// Resolved on the shortened end-of-half path
    pub late_half: bool,
    /// Every die rolled while resolving the drive, in order
    pub dice: Vec<RollRecord>,
}

impl DriveLog {
    /// Team credited with `points`
    pub fn scoring_team(&self) -> Team {
        match self.outcome {
            DriveOutcome::Safety { .. } => self.team.opponent(),
            _ => self.team,
        }
    }

    /// Short human-readable result, e.g. "TD+1pt" or "FG Miss (late-half)"
    pub fn result(&self) -> String {
        let text = self.outcome.describe();
        if self.late_half {
            format!("{} (late-half)", text)
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(outcome: DriveOutcome, late_half: bool) -> DriveLog {
        DriveLog {
            half: Half::First,
            team: Team::Bombers,
            start: 30,
            style: PlayStyle::Balanced,
            roll: 10,
            yards: 18,
            time_blocks: 14,
            end: 48,
            points: outcome.points(),
            outcome,
            late_half,
            dice: Vec::new(),
        }
    }

    #[test]
    fn test_points() {
        let good_kick = ConversionResult {
            kind: ConversionKind::OnePoint,
            good: true,
        };
        let failed_two = ConversionResult {
            kind: ConversionKind::TwoPoint,
            good: false,
        };
        assert_eq!(
            DriveOutcome::Safety {
                via_fourth_down: false
            }
            .points(),
            2
        );
        assert_eq!(
            DriveOutcome::FieldGoal {
                made: true,
                distance: 30
            }
            .points(),
            3
        );
        assert_eq!(
            DriveOutcome::FieldGoal {
                made: false,
                distance: 30
            }
            .points(),
            0
        );
        assert_eq!(
            DriveOutcome::Touchdown {
                conversion: good_kick,
                via_fourth_down: false
            }
            .points(),
            7
        );
        assert_eq!(
            DriveOutcome::Touchdown {
                conversion: failed_two,
                via_fourth_down: true
            }
            .points(),
            6
        );
        assert_eq!(DriveOutcome::Punt.points(), 0);
    }

    #[test]
    fn test_safety_credits_defense() {
        let safety = DriveOutcome::Safety {
            via_fourth_down: false,
        };
        assert_eq!(log(safety, false).scoring_team(), Team::Gunners);
        assert_eq!(log(DriveOutcome::Punt, false).scoring_team(), Team::Bombers);
    }

    #[test]
    fn test_result_strings() {
        let two = ConversionResult {
            kind: ConversionKind::TwoPoint,
            good: true,
        };
        assert_eq!(
            log(
                DriveOutcome::Touchdown {
                    conversion: two,
                    via_fourth_down: false
                },
                false
            )
            .result(),
            "TD+2pt"
        );
        assert_eq!(
            log(
                DriveOutcome::FourthDown {
                    converted: true,
                    to_go: ToGo::Yards(5)
                },
                false
            )
            .result(),
            "4th down conversion (5)"
        );
        assert_eq!(
            log(
                DriveOutcome::FourthDown {
                    converted: false,
                    to_go: ToGo::Goal(3)
                },
                false
            )
            .result(),
            "4th down failed (goal)"
        );
        assert_eq!(
            log(
                DriveOutcome::Safety {
                    via_fourth_down: false
                },
                true
            )
            .result(),
            "Safety (late-half)"
        );
        assert_eq!(
            log(
                DriveOutcome::Safety {
                    via_fourth_down: true
                },
                false
            )
            .result(),
            "4th down Safety"
        );
        assert_eq!(
            log(
                DriveOutcome::Turnover {
                    negated_touchdown: true
                },
                false
            )
            .result(),
            "Turnover (would be TD)"
        );
    }

    #[test]
    fn test_to_go_display() {
        assert_eq!(ToGo::Yards(4).to_string(), "4th and 4");
        assert_eq!(ToGo::Goal(3).to_string(), "4th and goal from the 3");
    }
}
