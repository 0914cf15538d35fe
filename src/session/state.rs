//! One interactive game
//!
//! The session owns everything about a game in progress and applies one
//! move at a time. Every accepted move is exactly one transition of the
//! drive state machine; rejected moves change nothing.

use serde::{Deserialize, Serialize};

use crate::core::dice::{self, GameRng};
use crate::core::types::{GameId, Half, PlayStyle, Team, Yard};
use crate::drive::{
    resolve_extra_point, resolve_fourth_down, resolve_untimed_down, start_drive, DriveLog, DriveProgress,
    DriveResolution, DriveState, FourthDownSituation, PendingTouchdown, Possession, ToGo, UntimedSituation,
};
use crate::field;
use crate::game::{Clock, GameResult, Scoreboard};
use crate::policy::{ConversionKind, FourthDownCall, GameSituation, UntimedCall};
use crate::session::error::SessionError;

/// Chat-platform user id
pub type PlayerId = u64;

/// Who controls a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human(PlayerId),
    Computer,
}

/// Where the game is waiting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingStyle,
    FourthDown(FourthDownSituation),
    UntimedDown(UntimedSituation),
    ExtraPoint(PendingTouchdown),
    Finished,
}

/// Phase without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    AwaitingStyle,
    FourthDown,
    UntimedDown,
    ExtraPoint,
    Finished,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::AwaitingStyle => PhaseKind::AwaitingStyle,
            Phase::FourthDown(_) => PhaseKind::FourthDown,
            Phase::UntimedDown(_) => PhaseKind::UntimedDown,
            Phase::ExtraPoint(_) => PhaseKind::ExtraPoint,
            Phase::Finished => PhaseKind::Finished,
        }
    }

    /// Drive rolled but not finished, if any
    pub fn drive(&self) -> Option<&DriveState> {
        match self {
            Phase::FourthDown(s) => Some(&s.drive),
            Phase::UntimedDown(s) => Some(&s.drive),
            Phase::ExtraPoint(p) => Some(&p.drive),
            Phase::AwaitingStyle | Phase::Finished => None,
        }
    }
}

/// A player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Style(PlayStyle),
    GoForIt,
    FieldGoal,
    Punt,
    /// Decline the untimed down
    EndHalf,
    ExtraPoint(ConversionKind),
}

/// What an accepted move changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    /// Set when the move finished a drive
    pub log: Option<DriveLog>,
    /// Set while a drive is waiting on a decision
    pub drive: Option<DriveState>,
    pub to_go: Option<ToGo>,
    pub phase: PhaseKind,
    pub score: Scoreboard,
    pub possession: Team,
    pub spot: Yard,
    pub half_ended: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: GameId,
    bombers: Player,
    gunners: Player,
    score: Scoreboard,
    half: Half,
    clock: Clock,
    possession: Team,
    spot: Yard,
    phase: Phase,
    drives: Vec<DriveLog>,
    rng: GameRng,
}

impl GameSession {
    /// Start a game at the opening kickoff
    pub fn new(bombers: Player, gunners: Player, seed: u64) -> Result<Self, SessionError> {
        if let (Player::Human(a), Player::Human(b)) = (bombers, gunners) {
            if a == b {
                return Err(SessionError::SamePlayer);
            }
        }

        Ok(Self {
            id: GameId::new(),
            bombers,
            gunners,
            score: Scoreboard::new(),
            half: Half::First,
            clock: Clock::full_half(),
            possession: Team::Bombers,
            spot: field::kickoff_spot(Team::Bombers),
            phase: Phase::AwaitingStyle,
            drives: Vec::new(),
            rng: dice::seeded(seed),
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn player(&self, team: Team) -> Player {
        match team {
            Team::Bombers => self.bombers,
            Team::Gunners => self.gunners,
        }
    }

    /// Team controlled by `player`, if any
    pub fn team_of(&self, player: PlayerId) -> Option<Team> {
        Team::ALL
            .into_iter()
            .find(|&team| self.player(team) == Player::Human(player))
    }

    /// The offense makes every call, so it is always the one to act
    pub fn acting_team(&self) -> Team {
        self.possession
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn half(&self) -> Half {
        self.half
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn possession(&self) -> Team {
        self.possession
    }

    pub fn spot(&self) -> Yard {
        self.spot
    }

    pub fn drives(&self) -> &[DriveLog] {
        &self.drives
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Situation from the offense's point of view
    pub fn situation(&self) -> GameSituation {
        GameSituation::new(self.half, self.clock.remaining(), self.score.lead(self.possession))
    }

    /// Snapshot of the game so far as a result record
    pub fn result(&self) -> GameResult {
        GameResult {
            id: self.id,
            seed: None,
            drives: self.drives.clone(),
            score: self.score,
        }
    }

    /// Apply one move for whoever is acting. Authorization is the submitter's job.
    pub fn apply(&mut self, mv: Move) -> Result<Effects, SessionError> {
        if self.is_finished() {
            return Err(SessionError::GameOver);
        }

        let phase = std::mem::replace(&mut self.phase, Phase::AwaitingStyle);
        let progress = match (phase, mv) {
            (Phase::AwaitingStyle, Move::Style(style)) => {
                let possession = Possession {
                    half: self.half,
                    team: self.possession,
                    start: self.spot,
                    style,
                    blocks_left: self.clock.remaining(),
                };
                start_drive(possession, &mut self.rng)
            }
            (Phase::FourthDown(situation), Move::FieldGoal) if !situation.drive.in_field_goal_range() => {
                self.phase = Phase::FourthDown(situation);
                return Err(SessionError::OutOfFieldGoalRange);
            }
            (Phase::FourthDown(situation), Move::GoForIt) => {
                resolve_fourth_down(situation, FourthDownCall::GoForIt, &mut self.rng)
            }
            (Phase::FourthDown(situation), Move::FieldGoal) => {
                resolve_fourth_down(situation, FourthDownCall::FieldGoal, &mut self.rng)
            }
            (Phase::FourthDown(situation), Move::Punt) => {
                resolve_fourth_down(situation, FourthDownCall::Punt, &mut self.rng)
            }
            (Phase::UntimedDown(situation), Move::FieldGoal) if !situation.drive.in_field_goal_range() => {
                self.phase = Phase::UntimedDown(situation);
                return Err(SessionError::OutOfFieldGoalRange);
            }
            (Phase::UntimedDown(situation), Move::FieldGoal) => {
                resolve_untimed_down(situation, UntimedCall::FieldGoal, &mut self.rng)
            }
            (Phase::UntimedDown(situation), Move::GoForIt) => {
                resolve_untimed_down(situation, UntimedCall::GoForIt, &mut self.rng)
            }
            (Phase::UntimedDown(situation), Move::EndHalf) => {
                resolve_untimed_down(situation, UntimedCall::EndHalf, &mut self.rng)
            }
            (Phase::ExtraPoint(pending), Move::ExtraPoint(kind)) => {
                DriveProgress::Complete(resolve_extra_point(pending, kind, &mut self.rng))
            }
            (phase, _) => {
                self.phase = phase;
                return Err(SessionError::WrongPhase);
            }
        };

        self.advance(progress)
    }

    fn advance(&mut self, progress: DriveProgress) -> Result<Effects, SessionError> {
        let mut log = None;
        let mut to_go = None;
        let mut half_ended = false;

        match progress {
            DriveProgress::Complete(resolution) => {
                half_ended = self.finish_drive(&resolution)?;
                log = Some(resolution.log);
            }
            DriveProgress::FourthDown(situation) => {
                to_go = Some(situation.to_go);
                self.phase = Phase::FourthDown(situation);
            }
            DriveProgress::UntimedDown(situation) => self.phase = Phase::UntimedDown(situation),
            DriveProgress::Touchdown(pending) => self.phase = Phase::ExtraPoint(pending),
        }

        Ok(Effects {
            log,
            drive: self.phase.drive().cloned(),
            to_go,
            phase: self.phase.kind(),
            score: self.score,
            possession: self.possession,
            spot: self.spot,
            half_ended,
            game_over: self.is_finished(),
        })
    }

    /// Book a finished drive; returns whether the half ended
    fn finish_drive(&mut self, resolution: &DriveResolution) -> Result<bool, SessionError> {
        self.score.record(&resolution.log);
        self.clock.spend(resolution.time_spent)?;
        if resolution.ends_half {
            self.clock.expire();
        }
        self.drives.push(resolution.log.clone());
        self.possession = resolution.next_team;
        self.spot = resolution.next_position;
        self.phase = Phase::AwaitingStyle;

        if !self.clock.is_expired() {
            return Ok(false);
        }

        match self.half.next() {
            Some(next) => {
                tracing::info!("Session {:?}: {} over, {}", self.id, self.half, self.score);
                self.half = next;
                self.clock = Clock::full_half();
                self.possession = Team::Gunners;
                self.spot = field::kickoff_spot(Team::Gunners);
            }
            None => {
                tracing::info!("Session {:?}: final, {}", self.id, self.score);
                self.phase = Phase::Finished;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_seat(seed: u64) -> GameSession {
        GameSession::new(Player::Human(1), Player::Human(2), seed).unwrap()
    }

    #[test]
    fn test_same_player_rejected() {
        assert!(matches!(
            GameSession::new(Player::Human(5), Player::Human(5), 0),
            Err(SessionError::SamePlayer)
        ));
        assert!(GameSession::new(Player::Computer, Player::Computer, 0).is_ok());
    }

    #[test]
    fn test_opening_state() {
        let session = hot_seat(1);
        assert_eq!(session.possession(), Team::Bombers);
        assert_eq!(session.spot(), 30);
        assert_eq!(session.phase().kind(), PhaseKind::AwaitingStyle);
        assert_eq!(session.team_of(2), Some(Team::Gunners));
        assert_eq!(session.team_of(3), None);
    }

    #[test]
    fn test_wrong_phase_leaves_state_alone() {
        let mut session = hot_seat(1);
        assert!(matches!(session.apply(Move::Punt), Err(SessionError::WrongPhase)));
        assert!(matches!(
            session.apply(Move::ExtraPoint(ConversionKind::OnePoint)),
            Err(SessionError::WrongPhase)
        ));
        assert_eq!(session.phase().kind(), PhaseKind::AwaitingStyle);
        assert!(session.drives().is_empty());
    }

    #[test]
    fn test_every_move_is_one_transition() {
        let mut session = hot_seat(9);
        let effects = session.apply(Move::Style(PlayStyle::Balanced)).unwrap();
        match effects.phase {
            PhaseKind::AwaitingStyle => assert_eq!(session.drives().len(), 1),
            PhaseKind::FourthDown => {
                assert!(effects.to_go.is_some());
                assert!(session.drives().is_empty());
            }
            PhaseKind::ExtraPoint | PhaseKind::UntimedDown => assert!(session.drives().is_empty()),
            PhaseKind::Finished => panic!("game cannot end on the first drive"),
        }
    }
}
