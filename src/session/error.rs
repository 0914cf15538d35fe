use thiserror::Error;

use crate::core::error::GridironError;

/// Rejected session actions. A rejected move leaves the session unchanged.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("It's not your turn")]
    NotYourTurn,

    #[error("That move isn't available right now")]
    WrongPhase,

    #[error("Field goal range is 50 yards or less")]
    OutOfFieldGoalRange,

    #[error("A game is already in progress here")]
    GameInProgress,

    #[error("No game in progress")]
    NoGame,

    #[error("A player can't take both sides")]
    SamePlayer,

    #[error("The game is over")]
    GameOver,

    #[error("Session lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Engine(#[from] GridironError),
}
