//! Single-drive resolution
//!
//! A drive is resolved in stages. `start_drive` rolls the drive and turnover
//! dice and either finishes the drive or stops at the first decision point:
//! a fourth down, an untimed final down, or a try after a touchdown. Each
//! `resolve_*` function takes one decision and advances the drive.
//! `resolve_drive` runs every stage with the computer coach.
//!
//! Order on every path: safety, then touchdown (negated by a turnover),
//! then turnover, then the fourth-down decision.

use serde::{Deserialize, Serialize};

use crate::core::dice::{Dice, DrawPurpose, RollPurpose, RollRecord};
use crate::core::types::{Block, Half, PlayStyle, Team, Yard};
use crate::drive::outcome::{ConversionResult, DriveLog, DriveOutcome, ToGo};
use crate::field;
use crate::game::Scoreboard;
use crate::policy::{self, CoachProfile, ConversionKind, FourthDownCall, GameSituation, UntimedCall};
use crate::tables::{self, ConversionRow, DriveRow, TABLE_DIE, TOUCHDOWN_CLOCK_DIE, TWO_POINT_DIE};

/// Everything fixed at the snap of a drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Possession {
    pub half: Half,
    pub team: Team,
    pub start: Yard,
    pub style: PlayStyle,
    pub blocks_left: Block,
}

/// A drive that has been rolled but not finished
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveState {
    pub possession: Possession,
    pub roll: u32,
    pub yards: Yard,
    pub time_blocks: Block,
    /// Current ball spot
    pub end: Yard,
    pub late_half: bool,
    pub dice: Vec<RollRecord>,
}

impl DriveState {
    pub fn team(&self) -> Team {
        self.possession.team
    }

    pub fn yards_to_goal(&self) -> Yard {
        field::yards_to_goal(self.team(), self.end)
    }

    pub fn in_field_goal_range(&self) -> bool {
        field::within_field_goal_range(self.team(), self.end)
    }

    fn finish(self, outcome: DriveOutcome, next_team: Team, next_position: Yard) -> DriveResolution {
        let p = self.possession;
        let log = DriveLog {
            half: p.half,
            team: p.team,
            start: p.start,
            style: p.style,
            roll: self.roll,
            yards: self.yards,
            time_blocks: self.time_blocks,
            end: self.end,
            points: outcome.points(),
            outcome,
            late_half: self.late_half,
            dice: self.dice,
        };
        DriveResolution {
            time_spent: log.time_blocks,
            ends_half: log.late_half,
            log,
            next_team,
            next_position,
        }
    }

    /// Opponent kicks off to nobody: it receives at its own kickoff spot
    fn finish_with_kickoff(self, outcome: DriveOutcome) -> DriveResolution {
        let receiving = self.team().opponent();
        self.finish(outcome, receiving, field::kickoff_spot(receiving))
    }

    /// Opponent takes over where the ball is
    fn finish_at_spot(self, outcome: DriveOutcome) -> DriveResolution {
        let spot = self.end;
        let next = self.team().opponent();
        self.finish(outcome, next, spot)
    }

    fn safety(self, via_fourth_down: bool) -> DriveResolution {
        self.finish_with_kickoff(DriveOutcome::Safety { via_fourth_down })
    }

    fn negated_touchdown(mut self) -> DriveResolution {
        let receiving = self.team().opponent();
        self.end = field::touchback_spot(receiving);
        self.finish_at_spot(DriveOutcome::Turnover {
            negated_touchdown: true,
        })
    }

    fn touchdown(mut self, via_fourth_down: bool) -> DriveProgress {
        self.end = self.team().opponent().own_goal();
        DriveProgress::Touchdown(PendingTouchdown {
            drive: self,
            via_fourth_down,
        })
    }
}

/// Fourth down waiting for go / kick / punt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourthDownSituation {
    pub drive: DriveState,
    pub to_go: ToGo,
}

/// Clock expired mid-drive; the offense gets one untimed down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UntimedSituation {
    pub drive: DriveState,
}

/// Touchdown scored, waiting for the try
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTouchdown {
    pub drive: DriveState,
    pub via_fourth_down: bool,
}

/// Where a drive stands after a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DriveProgress {
    Complete(DriveResolution),
    FourthDown(FourthDownSituation),
    UntimedDown(UntimedSituation),
    Touchdown(PendingTouchdown),
}

/// A finished drive and what happens next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveResolution {
    pub log: DriveLog,
    pub time_spent: Block,
    /// Next team in possession. The same team after a fourth-down conversion.
    pub next_team: Team,
    pub next_position: Yard,
    /// The half is over regardless of the clock
    pub ends_half: bool,
}

/// Result of one play from the fourth-down conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourthDownAttempt {
    Touchdown,
    /// Thrown back into the offense's own end zone
    Safety { spot: Yard },
    FirstDown { spot: Yard },
    Failed { spot: Yard },
}

/// Dice wrapper that keeps a trail of every roll
struct Recorder<'a, D: Dice + ?Sized> {
    inner: &'a mut D,
    trail: &'a mut Vec<RollRecord>,
}

impl<'a, D: Dice + ?Sized> Recorder<'a, D> {
    fn new(inner: &'a mut D, trail: &'a mut Vec<RollRecord>) -> Self {
        Self { inner, trail }
    }
}

impl<D: Dice + ?Sized> Dice for Recorder<'_, D> {
    fn roll(&mut self, purpose: RollPurpose, sides: u32) -> u32 {
        let value = self.inner.roll(purpose, sides);
        self.trail.push(RollRecord {
            purpose,
            sides,
            value,
        });
        value
    }

    fn draw(&mut self, purpose: DrawPurpose) -> f64 {
        self.inner.draw(purpose)
    }
}

/// Yards needed on fourth down after a drive that gained `gained`
///
/// Short drives leave exactly the rest of ten yards. Longer drives roll the
/// style's die. Anything reaching the goal line becomes fourth and goal.
pub fn fourth_down_distance<D: Dice + ?Sized>(
    style: PlayStyle,
    gained: Yard,
    yards_to_goal: Yard,
    dice: &mut D,
) -> ToGo {
    let first_down = crate::core::config::rules().first_down_yards;
    let needed = if gained < first_down {
        first_down - gained
    } else {
        dice.roll(RollPurpose::DistanceToGo, style.to_go_die()) as Yard
    };

    if needed >= yards_to_goal {
        ToGo::Goal(yards_to_goal)
    } else {
        ToGo::Yards(needed)
    }
}

/// Run one play off the fourth-down table from `x`
pub fn attempt_fourth_down<D: Dice + ?Sized>(team: Team, x: Yard, to_go: ToGo, dice: &mut D) -> FourthDownAttempt {
    let gained = match tables::conversion_row(dice.roll(RollPurpose::Conversion, TABLE_DIE)) {
        ConversionRow::Touchdown => return FourthDownAttempt::Touchdown,
        ConversionRow::Yards(yards) => yards,
    };

    let raw = field::raw_advance(team, x, gained);
    let spot = field::clamp_to_field(raw);
    if field::is_safety(team, raw) {
        FourthDownAttempt::Safety { spot }
    } else if field::is_touchdown(team, spot) {
        FourthDownAttempt::Touchdown
    } else if gained >= to_go.yards() {
        FourthDownAttempt::FirstDown { spot }
    } else {
        FourthDownAttempt::Failed { spot }
    }
}

/// Kick a field goal from `x`
///
/// Callers check `field::within_field_goal_range` first.
pub fn attempt_field_goal<D: Dice + ?Sized>(team: Team, x: Yard, dice: &mut D) -> bool {
    let distance = field::yards_to_goal(team, x);
    tables::kick_is_good(dice.roll(RollPurpose::Kick, TABLE_DIE), distance)
}

pub fn attempt_extra_point<D: Dice + ?Sized>(kind: ConversionKind, dice: &mut D) -> ConversionResult {
    let good = match kind {
        ConversionKind::OnePoint => tables::extra_point_is_good(dice.roll(RollPurpose::Kick, TABLE_DIE)),
        ConversionKind::TwoPoint => tables::two_point_is_good(dice.roll(RollPurpose::TwoPoint, TWO_POINT_DIE)),
    };
    ConversionResult { kind, good }
}

/// Roll a drive and stop at the first decision
pub fn start_drive<D: Dice + ?Sized>(possession: Possession, dice: &mut D) -> DriveProgress {
    let Possession {
        team,
        start,
        style,
        blocks_left,
        ..
    } = possession;
    let table = tables::table(style);
    let mut trail = Vec::new();

    let (roll, turnover, yards, time) = {
        let mut dice = Recorder::new(dice, &mut trail);
        let roll = dice.roll(RollPurpose::Drive, TABLE_DIE);
        let turnover = tables::is_turnover(style, dice.roll(RollPurpose::Turnover, TABLE_DIE));
        let needed = field::yards_to_goal(team, start);
        let (yards, time) = match table.row(roll) {
            // A gain that reaches the goal only costs the clock of the distance covered
            DriveRow::Gain { yards, time } if yards >= needed => {
                let cap = table.touchdown_time_cap(needed);
                let clock = dice.roll(RollPurpose::TouchdownClock, TOUCHDOWN_CLOCK_DIE);
                (needed, time.min(clock).min(cap))
            }
            DriveRow::Gain { yards, time } => (yards, time),
            DriveRow::Touchdown => {
                let cap = table.touchdown_time_cap(needed);
                let time = dice.roll(RollPurpose::TouchdownClock, TOUCHDOWN_CLOCK_DIE).min(cap);
                (needed, time)
            }
        };
        (roll, turnover, yards, time)
    };

    let late_half = time > blocks_left;
    let (yards, time) = if late_half {
        table.largest_fitting_row(blocks_left)
    } else {
        (yards, time)
    };

    let raw = field::raw_advance(team, start, yards);
    let end = field::clamp_to_field(raw);
    let mut state = DriveState {
        possession,
        roll,
        yards,
        time_blocks: time,
        end,
        late_half,
        dice: trail,
    };

    if field::is_safety(team, raw) {
        return DriveProgress::Complete(state.safety(false));
    }
    if field::is_touchdown(team, end) {
        if turnover {
            return DriveProgress::Complete(state.negated_touchdown());
        }
        return state.touchdown(false);
    }
    if turnover {
        return DriveProgress::Complete(state.finish_at_spot(DriveOutcome::Turnover {
            negated_touchdown: false,
        }));
    }
    if late_half {
        return DriveProgress::UntimedDown(UntimedSituation { drive: state });
    }

    let to_go = {
        let yards_to_goal = state.yards_to_goal();
        let mut dice = Recorder::new(dice, &mut state.dice);
        fourth_down_distance(style, yards, yards_to_goal, &mut dice)
    };
    DriveProgress::FourthDown(FourthDownSituation { drive: state, to_go })
}

fn kick_field_goal<D: Dice + ?Sized>(mut state: DriveState, dice: &mut D) -> DriveResolution {
    debug_assert!(state.in_field_goal_range(), "field goal attempted out of range");
    let team = state.team();
    let distance = state.yards_to_goal();
    let made = {
        let mut dice = Recorder::new(dice, &mut state.dice);
        attempt_field_goal(team, state.end, &mut dice)
    };

    let outcome = DriveOutcome::FieldGoal { made, distance };
    if made {
        state.finish_with_kickoff(outcome)
    } else {
        state.end = field::missed_field_goal_spot(team, state.end);
        state.finish_at_spot(outcome)
    }
}

pub fn resolve_fourth_down<D: Dice + ?Sized>(
    situation: FourthDownSituation,
    call: FourthDownCall,
    dice: &mut D,
) -> DriveProgress {
    let FourthDownSituation { mut drive, to_go } = situation;
    let team = drive.team();

    match call {
        FourthDownCall::GoForIt => {
            let attempt = {
                let mut dice = Recorder::new(dice, &mut drive.dice);
                attempt_fourth_down(team, drive.end, to_go, &mut dice)
            };
            match attempt {
                FourthDownAttempt::Touchdown => drive.touchdown(true),
                FourthDownAttempt::Safety { spot } => {
                    drive.end = spot;
                    DriveProgress::Complete(drive.safety(true))
                }
                FourthDownAttempt::FirstDown { spot } => {
                    drive.end = spot;
                    let outcome = DriveOutcome::FourthDown {
                        converted: true,
                        to_go,
                    };
                    DriveProgress::Complete(drive.finish(outcome, team, spot))
                }
                FourthDownAttempt::Failed { spot } => {
                    drive.end = spot;
                    DriveProgress::Complete(drive.finish_at_spot(DriveOutcome::FourthDown {
                        converted: false,
                        to_go,
                    }))
                }
            }
        }
        FourthDownCall::FieldGoal => DriveProgress::Complete(kick_field_goal(drive, dice)),
        FourthDownCall::Punt => {
            drive.end = field::punt_spot(team, drive.end);
            DriveProgress::Complete(drive.finish_at_spot(DriveOutcome::Punt))
        }
    }
}

pub fn resolve_untimed_down<D: Dice + ?Sized>(
    situation: UntimedSituation,
    call: UntimedCall,
    dice: &mut D,
) -> DriveProgress {
    let mut drive = situation.drive;
    let team = drive.team();

    match call {
        UntimedCall::EndHalf => DriveProgress::Complete(drive.finish_with_kickoff(DriveOutcome::HalfExpired)),
        UntimedCall::FieldGoal => DriveProgress::Complete(kick_field_goal(drive, dice)),
        UntimedCall::GoForIt => {
            // Only reaching the end zone counts on the last play
            let to_go = ToGo::Goal(drive.yards_to_goal());
            let attempt = {
                let mut dice = Recorder::new(dice, &mut drive.dice);
                attempt_fourth_down(team, drive.end, to_go, &mut dice)
            };
            match attempt {
                FourthDownAttempt::Touchdown => drive.touchdown(true),
                FourthDownAttempt::Safety { spot } => {
                    drive.end = spot;
                    DriveProgress::Complete(drive.safety(true))
                }
                FourthDownAttempt::FirstDown { spot } | FourthDownAttempt::Failed { spot } => {
                    drive.end = spot;
                    DriveProgress::Complete(drive.finish_with_kickoff(DriveOutcome::HalfExpired))
                }
            }
        }
    }
}

pub fn resolve_extra_point<D: Dice + ?Sized>(
    pending: PendingTouchdown,
    kind: ConversionKind,
    dice: &mut D,
) -> DriveResolution {
    let PendingTouchdown {
        mut drive,
        via_fourth_down,
    } = pending;
    let conversion = {
        let mut dice = Recorder::new(dice, &mut drive.dice);
        attempt_extra_point(kind, &mut dice)
    };
    drive.finish_with_kickoff(DriveOutcome::Touchdown {
        conversion,
        via_fourth_down,
    })
}

/// Resolve a whole drive with the computer coach making every call
///
/// Points are added to `score` once the drive is finished.
pub fn resolve_drive<D: Dice + ?Sized>(
    possession: Possession,
    score: &mut Scoreboard,
    coach: &CoachProfile,
    dice: &mut D,
) -> DriveResolution {
    let situation = GameSituation::new(possession.half, possession.blocks_left, score.lead(possession.team));
    let mut progress = start_drive(possession, dice);

    let resolution = loop {
        progress = match progress {
            DriveProgress::Complete(resolution) => break resolution,
            DriveProgress::FourthDown(fourth) => {
                let call = policy::choose_fourth_down_call(
                    coach,
                    &situation,
                    fourth.drive.yards_to_goal(),
                    fourth.to_go,
                    fourth.drive.in_field_goal_range(),
                    dice,
                );
                resolve_fourth_down(fourth, call, dice)
            }
            DriveProgress::UntimedDown(untimed) => {
                let call = policy::choose_untimed_call(
                    coach,
                    &situation,
                    untimed.drive.in_field_goal_range(),
                    untimed.drive.yards_to_goal(),
                    dice,
                );
                resolve_untimed_down(untimed, call, dice)
            }
            DriveProgress::Touchdown(pending) => {
                let kind = policy::choose_conversion(coach, &situation, dice);
                DriveProgress::Complete(resolve_extra_point(pending, kind, dice))
            }
        };
    };

    score.record(&resolution.log);
    tracing::debug!(
        "{} {} {} from {}: roll {} -> {} ({} blocks)",
        resolution.log.half,
        resolution.log.team,
        resolution.log.style,
        resolution.log.start,
        resolution.log.roll,
        resolution.log.result(),
        resolution.time_spent
    );
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::ScriptedDice;

    fn possession(team: Team, start: Yard, style: PlayStyle, blocks_left: Block) -> Possession {
        Possession {
            half: Half::First,
            team,
            start,
            style,
            blocks_left,
        }
    }

    fn no_turnover(seed: u64) -> ScriptedDice {
        ScriptedDice::new(seed).with_roll(RollPurpose::Turnover, 20)
    }

    #[test]
    fn test_short_drive_leaves_rest_of_ten() {
        // Balanced roll 5: 6 yards
        let mut dice = no_turnover(1).with_roll(RollPurpose::Drive, 5);
        match start_drive(possession(Team::Bombers, 30, PlayStyle::Balanced, 180), &mut dice) {
            DriveProgress::FourthDown(fourth) => {
                assert_eq!(fourth.to_go, ToGo::Yards(4));
                assert_eq!(fourth.drive.end, 36);
                assert_eq!(fourth.drive.time_blocks, 7);
            }
            other => panic!("expected fourth down, got {:?}", other),
        }
    }

    #[test]
    fn test_long_drive_rolls_style_die() {
        // Run roll 10: 15 yards, then d8 for distance
        let mut dice = no_turnover(1)
            .with_roll(RollPurpose::Drive, 10)
            .with_roll(RollPurpose::DistanceToGo, 6);
        match start_drive(possession(Team::Gunners, 70, PlayStyle::Run, 180), &mut dice) {
            DriveProgress::FourthDown(fourth) => {
                assert_eq!(fourth.to_go, ToGo::Yards(6));
                assert_eq!(fourth.drive.end, 55);
                let sides: Vec<u32> = fourth.drive.dice.iter().map(|r| r.sides).collect();
                assert_eq!(sides, vec![20, 20, 8]);
            }
            other => panic!("expected fourth down, got {:?}", other),
        }
    }

    #[test]
    fn test_turnover_stops_at_spot() {
        let mut dice = ScriptedDice::new(1)
            .with_roll(RollPurpose::Drive, 8)
            .with_roll(RollPurpose::Turnover, 1);
        match start_drive(possession(Team::Bombers, 30, PlayStyle::Pass, 180), &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert_eq!(
                    resolution.log.outcome,
                    DriveOutcome::Turnover {
                        negated_touchdown: false
                    }
                );
                assert_eq!(resolution.next_team, Team::Gunners);
                assert_eq!(resolution.next_position, 48);
            }
            other => panic!("expected turnover, got {:?}", other),
        }
    }

    #[test]
    fn test_negated_touchdown_goes_to_opponent_twenty() {
        let mut dice = ScriptedDice::new(1)
            .with_roll(RollPurpose::Drive, 20)
            .with_roll(RollPurpose::Turnover, 1)
            .with_roll(RollPurpose::TouchdownClock, 5);
        match start_drive(possession(Team::Bombers, 50, PlayStyle::Run, 180), &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert_eq!(
                    resolution.log.outcome,
                    DriveOutcome::Turnover {
                        negated_touchdown: true
                    }
                );
                assert_eq!(resolution.log.points, 0);
                assert_eq!(resolution.next_team, Team::Gunners);
                assert_eq!(resolution.next_position, 80);
            }
            other => panic!("expected negated touchdown, got {:?}", other),
        }
    }

    #[test]
    fn test_touchdown_clock_is_capped() {
        // Pass TD from 5 yards out: cheapest row reaching 5 costs 4 blocks
        let mut dice = no_turnover(1)
            .with_roll(RollPurpose::Drive, 18)
            .with_roll(RollPurpose::TouchdownClock, 19);
        match start_drive(possession(Team::Bombers, 95, PlayStyle::Pass, 180), &mut dice) {
            DriveProgress::Touchdown(pending) => {
                assert_eq!(pending.drive.time_blocks, 4);
                assert_eq!(pending.drive.yards, 5);
                assert_eq!(pending.drive.end, 100);
            }
            other => panic!("expected touchdown, got {:?}", other),
        }
    }

    #[test]
    fn test_gain_reaching_goal_uses_touchdown_clock() {
        // Run roll 19 from midfield: 90 yards in 45 blocks, but only 50 are needed
        let mut dice = no_turnover(1)
            .with_roll(RollPurpose::Drive, 19)
            .with_roll(RollPurpose::TouchdownClock, 20);
        match start_drive(possession(Team::Bombers, 50, PlayStyle::Run, 180), &mut dice) {
            DriveProgress::Touchdown(pending) => {
                assert_eq!(pending.drive.yards, 50);
                assert_eq!(pending.drive.time_blocks, 20);
                assert_eq!(pending.drive.end, 100);
                assert!(pending.drive.time_blocks <= tables::RUN_TABLE.touchdown_time_cap(50));
            }
            other => panic!("expected touchdown, got {:?}", other),
        }
    }

    #[test]
    fn test_gain_reaching_goal_capped_by_cheapest_row() {
        // Balanced roll 10 from the 98: 18 yards in 14 blocks, 2 needed costs 6
        let mut dice = no_turnover(1)
            .with_roll(RollPurpose::Drive, 10)
            .with_roll(RollPurpose::TouchdownClock, 20);
        match start_drive(possession(Team::Bombers, 98, PlayStyle::Balanced, 180), &mut dice) {
            DriveProgress::Touchdown(pending) => {
                assert_eq!(pending.drive.yards, 2);
                assert_eq!(pending.drive.time_blocks, 6);
            }
            other => panic!("expected touchdown, got {:?}", other),
        }
    }

    #[test]
    fn test_negated_gain_touchdown_logs_yards_needed() {
        let mut dice = ScriptedDice::new(1)
            .with_roll(RollPurpose::Drive, 19)
            .with_roll(RollPurpose::Turnover, 1)
            .with_roll(RollPurpose::TouchdownClock, 20);
        match start_drive(possession(Team::Bombers, 50, PlayStyle::Run, 180), &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert_eq!(
                    resolution.log.outcome,
                    DriveOutcome::Turnover {
                        negated_touchdown: true
                    }
                );
                assert_eq!(resolution.log.yards, 50);
                assert_eq!(resolution.log.time_blocks, 20);
                assert_eq!(resolution.next_position, 80);
            }
            other => panic!("expected negated touchdown, got {:?}", other),
        }
    }

    #[test]
    fn test_fourth_down_safety_is_flagged() {
        let mut dice = ScriptedDice::new(1).with_roll(RollPurpose::Conversion, 1);
        let situation = FourthDownSituation {
            drive: DriveState {
                possession: possession(Team::Bombers, 5, PlayStyle::Run, 100),
                roll: 2,
                yards: 0,
                time_blocks: 12,
                end: 5,
                late_half: false,
                dice: Vec::new(),
            },
            to_go: ToGo::Yards(10),
        };
        match resolve_fourth_down(situation, FourthDownCall::GoForIt, &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert_eq!(
                    resolution.log.outcome,
                    DriveOutcome::Safety {
                        via_fourth_down: true
                    }
                );
                assert_eq!(resolution.log.points, 2);
                assert_eq!(resolution.log.scoring_team(), Team::Gunners);
                assert_eq!(resolution.log.result(), "4th down Safety");
            }
            other => panic!("expected safety, got {:?}", other),
        }
    }

    #[test]
    fn test_fourth_down_conversion_keeps_ball() {
        let mut dice = ScriptedDice::new(1).with_roll(RollPurpose::Conversion, 9);
        let situation = FourthDownSituation {
            drive: DriveState {
                possession: possession(Team::Gunners, 70, PlayStyle::Balanced, 100),
                roll: 5,
                yards: 6,
                time_blocks: 7,
                end: 64,
                late_half: false,
                dice: Vec::new(),
            },
            to_go: ToGo::Yards(4),
        };
        match resolve_fourth_down(situation, FourthDownCall::GoForIt, &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert_eq!(resolution.next_team, Team::Gunners);
                assert_eq!(resolution.next_position, 59);
                assert!(resolution.log.outcome.keeps_possession());
                assert_eq!(resolution.log.result(), "4th down conversion (4)");
            }
            other => panic!("expected conversion, got {:?}", other),
        }
    }

    #[test]
    fn test_fourth_down_failure_is_turnover_on_downs() {
        let mut dice = ScriptedDice::new(1).with_roll(RollPurpose::Conversion, 5);
        let situation = FourthDownSituation {
            drive: DriveState {
                possession: possession(Team::Bombers, 30, PlayStyle::Run, 100),
                roll: 3,
                yards: 2,
                time_blocks: 12,
                end: 32,
                late_half: false,
                dice: Vec::new(),
            },
            to_go: ToGo::Yards(8),
        };
        match resolve_fourth_down(situation, FourthDownCall::GoForIt, &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert_eq!(resolution.next_team, Team::Gunners);
                assert_eq!(resolution.next_position, 33);
                assert_eq!(resolution.log.end, 33);
            }
            other => panic!("expected turnover on downs, got {:?}", other),
        }
    }

    #[test]
    fn test_missed_field_goal_spot() {
        let mut dice = ScriptedDice::new(1).with_roll(RollPurpose::Kick, 1);
        let situation = FourthDownSituation {
            drive: DriveState {
                possession: possession(Team::Bombers, 30, PlayStyle::Balanced, 100),
                roll: 12,
                yards: 30,
                time_blocks: 19,
                end: 60,
                late_half: false,
                dice: Vec::new(),
            },
            to_go: ToGo::Yards(3),
        };
        match resolve_fourth_down(situation, FourthDownCall::FieldGoal, &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert_eq!(
                    resolution.log.outcome,
                    DriveOutcome::FieldGoal {
                        made: false,
                        distance: 40
                    }
                );
                assert_eq!(resolution.next_position, 53);
            }
            other => panic!("expected missed kick, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_point_kick_and_two_point_try() {
        let pending = PendingTouchdown {
            drive: DriveState {
                possession: possession(Team::Gunners, 70, PlayStyle::Pass, 100),
                roll: 17,
                yards: 70,
                time_blocks: 20,
                end: 0,
                late_half: false,
                dice: Vec::new(),
            },
            via_fourth_down: false,
        };

        let mut dice = ScriptedDice::new(1).with_roll(RollPurpose::TwoPoint, 7);
        let resolution = resolve_extra_point(pending.clone(), ConversionKind::TwoPoint, &mut dice);
        assert_eq!(resolution.log.points, 8);
        assert_eq!(resolution.next_team, Team::Bombers);
        assert_eq!(resolution.next_position, 30);

        let mut dice = ScriptedDice::new(1).with_roll(RollPurpose::Kick, 1);
        let resolution = resolve_extra_point(pending, ConversionKind::OnePoint, &mut dice);
        assert_eq!(resolution.log.points, 6);
        assert_eq!(resolution.log.result(), "TD (XP missed)");
    }

    #[test]
    fn test_untimed_end_half() {
        // Run table, 10 blocks left: nothing fits, (0, 0) substitute
        let mut dice = no_turnover(1).with_roll(RollPurpose::Drive, 15);
        let untimed = match start_drive(possession(Team::Bombers, 30, PlayStyle::Run, 10), &mut dice) {
            DriveProgress::UntimedDown(untimed) => untimed,
            other => panic!("expected untimed down, got {:?}", other),
        };
        assert_eq!(untimed.drive.time_blocks, 0);
        assert_eq!(untimed.drive.end, 30);
        match resolve_untimed_down(untimed, UntimedCall::EndHalf, &mut dice) {
            DriveProgress::Complete(resolution) => {
                assert!(resolution.ends_half);
                assert_eq!(resolution.log.result(), "Half Ends (late-half)");
            }
            other => panic!("expected end of half, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_drive_records_score() {
        let coach = CoachProfile::default();
        let mut score = Scoreboard::new();
        let mut dice = no_turnover(3)
            .with_roll(RollPurpose::Drive, 20)
            .with_roll(RollPurpose::TouchdownClock, 10)
            .with_roll(RollPurpose::Kick, 12);
        let resolution = resolve_drive(
            possession(Team::Bombers, 30, PlayStyle::Run, 180),
            &mut score,
            &coach,
            &mut dice,
        );
        assert_eq!(resolution.log.points, 7);
        assert_eq!(score.get(Team::Bombers), 7);
        assert_eq!(score.get(Team::Gunners), 0);
        assert_eq!(resolution.time_spent, 10);
    }
}
