//! Interactive play
//!
//! Front ends (terminal, chat bots) drive a `GameSession` one move at a
//! time through a `MoveSubmitter`, with sessions held in a `SessionStore`.

pub mod error;
pub mod state;
pub mod store;
pub mod submitter;

pub use error::SessionError;
pub use state::{Effects, GameSession, Move, Phase, PhaseKind, Player, PlayerId};
pub use store::{ChannelId, SessionStore, SharedSession};
pub use submitter::{CoachSubmitter, HumanSubmitter, MoveSubmitter};
