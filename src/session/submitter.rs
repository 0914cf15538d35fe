//! Sources of moves
//!
//! A human and the computer coach submit moves through the same trait, so
//! the front end never needs to fake one as the other.

use crate::core::dice::{self, GameRng};
use crate::drive::DriveState;
use crate::policy::{
    choose_conversion, choose_fourth_down_call, choose_style, choose_untimed_call, CoachProfile, FourthDownCall,
    UntimedCall,
};
use crate::session::error::SessionError;
use crate::session::state::{Effects, GameSession, Move, Phase, Player, PlayerId};

pub trait MoveSubmitter {
    /// Apply `mv` to `session` on behalf of this submitter
    fn submit(&mut self, session: &mut GameSession, mv: Move) -> Result<Effects, SessionError>;
}

/// A person at the keyboard or in a chat channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanSubmitter {
    pub player: PlayerId,
}

impl HumanSubmitter {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl MoveSubmitter for HumanSubmitter {
    fn submit(&mut self, session: &mut GameSession, mv: Move) -> Result<Effects, SessionError> {
        if session.is_finished() {
            return Err(SessionError::GameOver);
        }
        if session.player(session.acting_team()) != Player::Human(self.player) {
            return Err(SessionError::NotYourTurn);
        }
        session.apply(mv)
    }
}

/// The computer coach
///
/// Draws its decisions from its own generator so the game's dice stay
/// independent of who is calling the plays.
#[derive(Debug, Clone)]
pub struct CoachSubmitter {
    coach: CoachProfile,
    rng: GameRng,
}

impl CoachSubmitter {
    pub fn new(coach: CoachProfile, seed: u64) -> Self {
        Self {
            coach,
            rng: dice::seeded(seed),
        }
    }

    pub fn coach(&self) -> &CoachProfile {
        &self.coach
    }

    /// Move the coach would make now, or None when the game is over
    pub fn pick_move(&mut self, session: &GameSession) -> Option<Move> {
        let situation = session.situation();
        let field_goal_range = |drive: &DriveState| (drive.in_field_goal_range(), drive.yards_to_goal());

        let mv = match session.phase() {
            Phase::AwaitingStyle => Move::Style(choose_style(&self.coach, &situation, &mut self.rng)),
            Phase::FourthDown(fourth) => {
                let (in_range, yards_to_goal) = field_goal_range(&fourth.drive);
                match choose_fourth_down_call(
                    &self.coach,
                    &situation,
                    yards_to_goal,
                    fourth.to_go,
                    in_range,
                    &mut self.rng,
                ) {
                    FourthDownCall::GoForIt => Move::GoForIt,
                    FourthDownCall::FieldGoal => Move::FieldGoal,
                    FourthDownCall::Punt => Move::Punt,
                }
            }
            Phase::UntimedDown(untimed) => {
                let (in_range, yards_to_goal) = field_goal_range(&untimed.drive);
                match choose_untimed_call(&self.coach, &situation, in_range, yards_to_goal, &mut self.rng) {
                    UntimedCall::GoForIt => Move::GoForIt,
                    UntimedCall::FieldGoal => Move::FieldGoal,
                    UntimedCall::EndHalf => Move::EndHalf,
                }
            }
            Phase::ExtraPoint(_) => Move::ExtraPoint(choose_conversion(&self.coach, &situation, &mut self.rng)),
            Phase::Finished => return None,
        };
        Some(mv)
    }

    /// Keep making moves while the computer has the ball
    pub fn take_turns(&mut self, session: &mut GameSession) -> Result<Vec<Effects>, SessionError> {
        let mut effects = Vec::new();
        while !session.is_finished() && session.player(session.acting_team()) == Player::Computer {
            let Some(mv) = self.pick_move(session) else {
                break;
            };
            effects.push(self.submit(session, mv)?);
        }
        Ok(effects)
    }
}

impl MoveSubmitter for CoachSubmitter {
    fn submit(&mut self, session: &mut GameSession, mv: Move) -> Result<Effects, SessionError> {
        if session.is_finished() {
            return Err(SessionError::GameOver);
        }
        if session.player(session.acting_team()) != Player::Computer {
            return Err(SessionError::NotYourTurn);
        }
        session.apply(mv)
    }
}
