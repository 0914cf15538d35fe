//! Isolated-drive studies
//!
//! Every possession starts from the same spot with a full clock and a tied
//! score, so the numbers reflect the tables and the coach's fourth-down
//! calls rather than game flow. A converted fourth down keeps the
//! possession going with the same style.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::config::rules;
use crate::core::dice::stream;
use crate::core::types::{Half, PlayStyle, Team, Yard};
use crate::drive::{resolve_drive, DriveLog, DriveOutcome, Possession};
use crate::game::Scoreboard;
use crate::policy::CoachProfile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickTally {
    pub attempts: usize,
    pub made: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveStudy {
    pub style: PlayStyle,
    /// Yards from the offense's own goal
    pub start: Yard,
    pub possessions: usize,
    /// Individual drive logs, including those ended by a conversion
    pub drives: usize,
    pub touchdowns: usize,
    pub turnovers: usize,
    pub negated_touchdowns: usize,
    pub safeties: usize,
    pub punts: usize,
    pub fourth_down_attempts: usize,
    pub fourth_down_conversions: usize,
    pub field_goals: KickTally,
    /// Field-goal attempts keyed by distance
    pub field_goal_distances: BTreeMap<Yard, KickTally>,
    /// Possessions keyed by points the offense scored
    pub points: BTreeMap<u32, usize>,
}

impl DriveStudy {
    fn new(style: PlayStyle, start: Yard) -> Self {
        Self {
            style,
            start,
            possessions: 0,
            drives: 0,
            touchdowns: 0,
            turnovers: 0,
            negated_touchdowns: 0,
            safeties: 0,
            punts: 0,
            fourth_down_attempts: 0,
            fourth_down_conversions: 0,
            field_goals: KickTally::default(),
            field_goal_distances: BTreeMap::new(),
            points: BTreeMap::new(),
        }
    }

    fn add_possession(&mut self, logs: &[DriveLog]) {
        self.possessions += 1;
        self.drives += logs.len();

        let mut offense_points = 0;
        for log in logs {
            match log.outcome {
                DriveOutcome::Safety { via_fourth_down } => {
                    self.safeties += 1;
                    if via_fourth_down {
                        self.fourth_down_attempts += 1;
                    }
                }
                DriveOutcome::Turnover { negated_touchdown } => {
                    self.turnovers += 1;
                    if negated_touchdown {
                        self.negated_touchdowns += 1;
                    }
                }
                DriveOutcome::Touchdown { via_fourth_down, .. } => {
                    self.touchdowns += 1;
                    if via_fourth_down {
                        self.fourth_down_attempts += 1;
                        self.fourth_down_conversions += 1;
                    }
                }
                DriveOutcome::FieldGoal { made, distance } => {
                    let tally = self.field_goal_distances.entry(distance).or_default();
                    tally.attempts += 1;
                    self.field_goals.attempts += 1;
                    if made {
                        tally.made += 1;
                        self.field_goals.made += 1;
                    }
                }
                DriveOutcome::Punt => self.punts += 1,
                DriveOutcome::FourthDown { converted, .. } => {
                    self.fourth_down_attempts += 1;
                    if converted {
                        self.fourth_down_conversions += 1;
                    }
                }
                DriveOutcome::HalfExpired => {}
            }
            if log.scoring_team() == log.team {
                offense_points += log.points;
            }
        }
        *self.points.entry(offense_points).or_default() += 1;
    }

    /// Share of drives that ended in a turnover (negated touchdowns included)
    pub fn turnover_rate(&self) -> f64 {
        ratio(self.turnovers, self.drives)
    }

    pub fn touchdown_rate(&self) -> f64 {
        ratio(self.touchdowns, self.possessions)
    }

    pub fn conversion_rate(&self) -> f64 {
        ratio(self.fourth_down_conversions, self.fourth_down_attempts)
    }

    pub fn field_goal_rate(&self) -> f64 {
        ratio(self.field_goals.made, self.field_goals.attempts)
    }

    /// Offense points per possession
    pub fn average_points(&self) -> f64 {
        let total: u32 = self.points.iter().map(|(&pts, &n)| pts * n as u32).sum();
        ratio(total as usize, self.possessions)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} from own {}: {} possessions, {:.1}% TD, {:.1}% turnover, \
             {} FG ({:.1}% good), {} punts, 4th down {}/{} ({:.1}%), {:.2} pts/possession",
            self.style.label(),
            self.start,
            self.possessions,
            100.0 * self.touchdown_rate(),
            100.0 * self.turnover_rate(),
            self.field_goals.attempts,
            100.0 * self.field_goal_rate(),
            self.punts,
            self.fourth_down_conversions,
            self.fourth_down_attempts,
            100.0 * self.conversion_rate(),
            self.average_points(),
        )
    }
}

pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Play one possession from `start` until the offense gives up the ball
pub fn play_possession(
    style: PlayStyle,
    start: Yard,
    coach: &CoachProfile,
    seed: u64,
    index: u64,
) -> Vec<DriveLog> {
    let mut rng = stream(seed, index);
    let mut score = Scoreboard::new();
    let mut logs = Vec::new();
    let mut position = Team::Bombers.own_yard_line(start);

    loop {
        let possession = Possession {
            half: Half::First,
            team: Team::Bombers,
            start: position,
            style,
            blocks_left: rules().blocks_per_half,
        };
        let resolution = resolve_drive(possession, &mut score, coach, &mut rng);
        let keeps = resolution.log.outcome.keeps_possession();
        position = resolution.next_position;
        logs.push(resolution.log);
        if !keeps {
            return logs;
        }
    }
}

/// Study `possessions` possessions of `style` starting at the offense's own `start`
pub fn study_drives(style: PlayStyle, start: Yard, possessions: usize, seed: u64) -> DriveStudy {
    study_drives_with(&CoachProfile::default(), style, start, possessions, seed)
}

pub fn study_drives_with(
    coach: &CoachProfile,
    style: PlayStyle,
    start: Yard,
    possessions: usize,
    seed: u64,
) -> DriveStudy {
    let chains: Vec<Vec<DriveLog>> = (0..possessions as u64)
        .into_par_iter()
        .map(|index| play_possession(style, start, coach, seed, index))
        .collect();

    let mut study = DriveStudy::new(style, start);
    for chain in &chains {
        study.add_possession(chain);
    }
    tracing::info!("{}", study.summary());
    study
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possession_ends_with_change_of_ball() {
        let coach = CoachProfile::default();
        for index in 0..50 {
            let logs = play_possession(PlayStyle::Balanced, 30, &coach, 3, index);
            let (last, rest) = logs.split_last().unwrap();
            assert!(!last.outcome.keeps_possession());
            assert!(rest.iter().all(|log| log.outcome.keeps_possession()));
        }
    }

    #[test]
    fn test_run_turns_it_over_least() {
        let run = study_drives(PlayStyle::Run, 30, 2000, 5);
        let pass = study_drives(PlayStyle::Pass, 30, 2000, 5);
        assert!(run.turnover_rate() < pass.turnover_rate());
    }

    #[test]
    fn test_counts_add_up() {
        let study = study_drives(PlayStyle::Balanced, 25, 500, 8);
        assert_eq!(study.possessions, 500);
        assert_eq!(study.points.values().sum::<usize>(), 500);
        let fg: usize = study.field_goal_distances.values().map(|t| t.attempts).sum();
        assert_eq!(fg, study.field_goals.attempts);
        assert!(study.fourth_down_conversions <= study.fourth_down_attempts);
    }
}
