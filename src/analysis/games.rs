//! Reports over full simulated games

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::drives::ratio;
use crate::core::types::{PlayStyle, Yard};
use crate::drive::{DriveLog, DriveOutcome};
use crate::field::{kickoff_spot, yards_to_goal};
use crate::game::GameResult;

/// Outcome counts for one play style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTally {
    pub drives: usize,
    pub touchdowns: usize,
    pub field_goals_made: usize,
    pub field_goals_missed: usize,
    pub turnovers: usize,
    pub punts: usize,
    pub safeties: usize,
    pub fourth_down_attempts: usize,
    pub offense_points: u32,
}

impl StyleTally {
    fn add(&mut self, log: &DriveLog) {
        self.drives += 1;
        match log.outcome {
            DriveOutcome::Touchdown { via_fourth_down, .. } => {
                self.touchdowns += 1;
                if via_fourth_down {
                    self.fourth_down_attempts += 1;
                }
            }
            DriveOutcome::FieldGoal { made: true, .. } => self.field_goals_made += 1,
            DriveOutcome::FieldGoal { made: false, .. } => self.field_goals_missed += 1,
            DriveOutcome::Turnover { .. } => self.turnovers += 1,
            DriveOutcome::Punt => self.punts += 1,
            DriveOutcome::Safety { via_fourth_down } => {
                self.safeties += 1;
                if via_fourth_down {
                    self.fourth_down_attempts += 1;
                }
            }
            DriveOutcome::FourthDown { .. } => self.fourth_down_attempts += 1,
            DriveOutcome::HalfExpired => {}
        }
        if log.scoring_team() == log.team {
            self.offense_points += log.points;
        }
    }

    pub fn touchdown_rate(&self) -> f64 {
        ratio(self.touchdowns, self.drives)
    }

    pub fn turnover_rate(&self) -> f64 {
        ratio(self.turnovers, self.drives)
    }

    pub fn average_points(&self) -> f64 {
        ratio(self.offense_points as usize, self.drives)
    }
}

/// Per-style outcomes of drives that started at the kickoff spot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleReport {
    pub tallies: AHashMap<PlayStyle, StyleTally>,
}

impl StyleReport {
    pub fn get(&self, style: PlayStyle) -> StyleTally {
        self.tallies.get(&style).copied().unwrap_or_default()
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "{:<11} {:>7} {:>7} {:>7} {:>7} {:>9}",
            "Style", "Drives", "TD%", "TO%", "FG", "Pts/drive"
        )];
        for style in PlayStyle::ALL {
            let t = self.get(style);
            lines.push(format!(
                "{:<11} {:>7} {:>6.1}% {:>6.1}% {:>3}/{:<3} {:>9.2}",
                style.label(),
                t.drives,
                100.0 * t.touchdown_rate(),
                100.0 * t.turnover_rate(),
                t.field_goals_made,
                t.field_goals_made + t.field_goals_missed,
                t.average_points(),
            ));
        }
        lines.join("\n")
    }
}

/// Compare styles on drives that began at the offense's kickoff spot
pub fn style_report(games: &[GameResult]) -> StyleReport {
    let mut report = StyleReport::default();
    for log in games.iter().flat_map(|g| &g.drives) {
        if log.start == kickoff_spot(log.team) {
            report.tallies.entry(log.style).or_default().add(log);
        }
    }
    report
}

/// Drives and offense points for one band of starting field position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionTally {
    pub drives: usize,
    pub scoring_drives: usize,
    pub offense_points: u32,
}

impl PositionTally {
    pub fn average_points(&self) -> f64 {
        ratio(self.offense_points as usize, self.drives)
    }
}

/// Starting-position report, banded by yards to goal in tens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartPositionReport {
    /// Keyed by the lower edge of the band: 0 is 0-9 yards out, 90 is 90-100
    pub bands: BTreeMap<Yard, PositionTally>,
}

impl StartPositionReport {
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("{:<10} {:>7} {:>9} {:>9}", "To goal", "Drives", "Scored", "Pts/drive")];
        for (band, tally) in &self.bands {
            lines.push(format!(
                "{:<10} {:>7} {:>9} {:>9.2}",
                format!("{}-{}", band, band + 9),
                tally.drives,
                tally.scoring_drives,
                tally.average_points(),
            ));
        }
        lines.join("\n")
    }
}

pub fn start_position_report(games: &[GameResult]) -> StartPositionReport {
    let mut report = StartPositionReport::default();
    for log in games.iter().flat_map(|g| &g.drives) {
        let band = (yards_to_goal(log.team, log.start) / 10).min(9) * 10;
        let tally = report.bands.entry(band).or_default();
        tally.drives += 1;
        if log.points > 0 && log.scoring_team() == log.team {
            tally.scoring_drives += 1;
            tally.offense_points += log.points;
        }
    }
    report
}
