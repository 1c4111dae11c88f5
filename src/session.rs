//! Match session management for hosts running many games at once.
//!
//! Every session owns its own `GameEngine`; nothing is shared between
//! matches. The manager is a cheap cloneable handle over the session table.

use crate::games::tictactoe::{BoardError, GameEngine, Mark, MatchOutcome, MoveError, MoveOutcome};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Unique identifier for a player.
pub type PlayerId = String;

/// A player seated in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player's unique ID.
    pub id: PlayerId,
    /// Player's name.
    pub name: String,
    /// Which mark this player uses (X or O).
    pub mark: Mark,
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No session with this ID.
    #[display("Session {} not found", id)]
    UnknownSession {
        /// Requested session ID.
        id: SessionId,
    },

    /// A session with this ID already exists.
    #[display("Session {} already exists", id)]
    DuplicateSession {
        /// Requested session ID.
        id: SessionId,
    },

    /// Both seats are taken.
    #[display("Session already has 2 players")]
    SessionFull,

    /// The player is not seated in this session.
    #[display("Player {} is not in this session", id)]
    UnknownPlayer {
        /// Requested player ID.
        id: PlayerId,
    },

    /// The player tried to move out of turn.
    #[display("Not your turn. Waiting for player {}", expected)]
    NotYourTurn {
        /// Mark expected to move next.
        expected: Mark,
    },

    /// The engine rejected the move.
    #[display("Invalid move: {}", _0)]
    #[from]
    Move(MoveError),

    /// The board could not be created.
    #[display("Invalid board: {}", _0)]
    #[from]
    Board(BoardError),

    /// Another thread panicked while holding the session table.
    #[display("Session table lock poisoned")]
    LockPoisoned,
}

/// A match with up to two seated players.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The match engine.
    pub engine: GameEngine,
    /// Player X.
    pub player_x: Option<Player>,
    /// Player O.
    pub player_o: Option<Player>,
}

impl GameSession {
    /// Creates a new session with an empty board of side `size`.
    #[instrument]
    pub fn new(id: SessionId, size: usize) -> Result<Self, SessionError> {
        let engine = GameEngine::new(size)?;
        info!(session_id = %id, "Creating new game session");
        Ok(Self {
            id,
            engine,
            player_x: None,
            player_o: None,
        })
    }

    /// Seats a player, X first. Returns the mark assigned.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn register_player(&mut self, id: PlayerId, name: String) -> Result<Mark, SessionError> {
        let seat = if self.player_x.is_none() {
            (&mut self.player_x, Mark::X)
        } else if self.player_o.is_none() {
            (&mut self.player_o, Mark::O)
        } else {
            warn!(player_id = %id, "Session already has 2 players");
            return Err(SessionError::SessionFull);
        };

        let (slot, mark) = seat;
        info!(player_id = %id, %mark, "Registering player");
        *slot = Some(Player { id, name, mark });
        Ok(mark)
    }

    /// Gets the player with the given ID.
    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        [self.player_x.as_ref(), self.player_o.as_ref()]
            .into_iter()
            .flatten()
            .find(|p| p.id == player_id)
    }

    /// Checks if it's the given player's turn.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn is_players_turn(&self, player_id: &str) -> bool {
        let Some(player) = self.get_player(player_id) else {
            debug!(player_id, "Player not found in session");
            return false;
        };

        let is_turn = self.engine.current_player() == Some(player.mark);
        debug!(player_id, player_mark = %player.mark, is_turn, "Checked if player's turn");
        is_turn
    }

    /// Makes a move for a seated player.
    ///
    /// Once the match is finished the engine's own rejection is returned.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn make_move(
        &mut self,
        player_id: &str,
        x: usize,
        y: usize,
    ) -> Result<MoveOutcome, SessionError> {
        let player = self.get_player(player_id).ok_or_else(|| {
            warn!(player_id, "Unknown player attempted move");
            SessionError::UnknownPlayer {
                id: player_id.to_string(),
            }
        })?;

        if let Some(expected) = self.engine.current_player()
            && expected != player.mark
        {
            warn!(player_id, %expected, player_mark = %player.mark, "Player tried to move out of turn");
            return Err(SessionError::NotYourTurn { expected });
        }

        self.submit_move(x, y)
    }

    /// Submits a move for whichever mark is to play.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn submit_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome, SessionError> {
        let result = self.engine.submit_move(x, y)?;
        info!(position = %result.position, outcome = %result.outcome, "Move completed successfully");
        Ok(result)
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, GameSession>>, SessionError> {
        self.sessions.lock().map_err(|_| SessionError::LockPoisoned)
    }

    /// Runs `f` on a session while holding the table lock.
    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut sessions = self.lock()?;
        let session = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::UnknownSession { id: id.to_string() }
        })?;
        f(session)
    }

    /// Creates a new session with a board of side `size`.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId, size: usize) -> Result<SessionId, SessionError> {
        let mut sessions = self.lock()?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::DuplicateSession { id });
        }

        let session = GameSession::new(id.clone(), size)?;
        sessions.insert(id.clone(), session);

        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Returns a snapshot of a session.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Result<GameSession, SessionError> {
        self.with_session(id, |session| Ok(session.clone()))
    }

    /// Removes a session, returning it.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameSession, SessionError> {
        let removed = self
            .lock()?
            .remove(id)
            .ok_or_else(|| SessionError::UnknownSession { id: id.to_string() })?;
        info!(session_id = id, "Removed session");
        Ok(removed)
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let mut ids: Vec<_> = self.lock()?.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }

    /// Seats a player in a session. Returns the assigned mark.
    #[instrument(skip(self))]
    pub fn register_player(
        &self,
        session_id: &str,
        player_id: PlayerId,
        name: String,
    ) -> Result<Mark, SessionError> {
        self.with_session(session_id, |session| session.register_player(player_id, name))
    }

    /// Makes a move for a seated player.
    #[instrument(skip(self))]
    pub fn make_move(
        &self,
        session_id: &str,
        player_id: &str,
        x: usize,
        y: usize,
    ) -> Result<MoveOutcome, SessionError> {
        self.with_session(session_id, |session| session.make_move(player_id, x, y))
    }

    /// Submits a move for whichever mark is to play.
    #[instrument(skip(self))]
    pub fn submit_move(&self, session_id: &str, x: usize, y: usize) -> Result<MoveOutcome, SessionError> {
        self.with_session(session_id, |session| session.submit_move(x, y))
    }

    /// Returns the outcome of a session's match.
    #[instrument(skip(self))]
    pub fn outcome(&self, session_id: &str) -> Result<MatchOutcome, SessionError> {
        self.with_session(session_id, |session| Ok(session.engine.outcome()))
    }

    /// Starts a new match in a session, keeping its players and board size.
    #[instrument(skip(self))]
    pub fn reset(&self, session_id: &str) -> Result<(), SessionError> {
        self.with_session(session_id, |session| {
            session.engine.reset();
            Ok(())
        })
    }
}
