//! Active sessions keyed by channel
//!
//! The registry lock is held only to look a session up; each session has
//! its own async mutex, so moves on one channel are serialized while other
//! channels proceed in parallel.

use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use tokio::sync::Mutex;

use crate::session::error::SessionError;
use crate::session::state::{Effects, GameSession, Move};
use crate::session::submitter::MoveSubmitter;

/// Chat channel (or terminal) hosting a game
pub type ChannelId = u64;

pub type SharedSession = Arc<Mutex<GameSession>>;

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<AHashMap<ChannelId, SharedSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new game for `channel`
    pub fn create(&self, channel: ChannelId, session: GameSession) -> Result<SharedSession, SessionError> {
        let mut sessions = self.sessions.write().map_err(|_| SessionError::LockPoisoned)?;
        if sessions.contains_key(&channel) {
            return Err(SessionError::GameInProgress);
        }
        let shared = Arc::new(Mutex::new(session));
        sessions.insert(channel, Arc::clone(&shared));
        tracing::info!("Session created for channel {}", channel);
        Ok(shared)
    }

    pub fn get(&self, channel: ChannelId) -> Result<SharedSession, SessionError> {
        let sessions = self.sessions.read().map_err(|_| SessionError::LockPoisoned)?;
        sessions.get(&channel).cloned().ok_or(SessionError::NoGame)
    }

    /// Tear down the game for `channel`
    pub fn end(&self, channel: ChannelId) -> Result<SharedSession, SessionError> {
        let mut sessions = self.sessions.write().map_err(|_| SessionError::LockPoisoned)?;
        let removed = sessions.remove(&channel).ok_or(SessionError::NoGame)?;
        tracing::info!("Session ended for channel {}", channel);
        Ok(removed)
    }

    pub fn contains(&self, channel: ChannelId) -> bool {
        self.sessions
            .read()
            .map(|sessions| sessions.contains_key(&channel))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|sessions| sessions.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Submit a move to `channel`'s game
    ///
    /// A move that finishes the game also removes it from the store.
    pub async fn submit<S: MoveSubmitter + ?Sized>(
        &self,
        channel: ChannelId,
        submitter: &mut S,
        mv: Move,
    ) -> Result<Effects, SessionError> {
        let shared = self.get(channel)?;
        let effects = {
            let mut session = shared.lock().await;
            submitter.submit(&mut session, mv)?
        };

        if effects.game_over {
            // A concurrent `end` may have removed it already
            match self.end(channel) {
                Ok(_) | Err(SessionError::NoGame) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(effects)
    }
}
