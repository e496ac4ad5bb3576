//! Human-versus-computer session.
//!
//! The session is what a front end talks to. Input is a requested cell
//! index or a reset; output is a [`Snapshot`] of the board and status after
//! every change. Requests that cannot be honoured (occupied cell, finished
//! game, computer's turn) are dropped without touching the state, so
//! repeated or late input events are harmless.

use super::game::GameState;
use super::search::best_move;
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Board and status after a change, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Status after the last change.
    pub status: GameStatus,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.board.display(), self.status)
    }
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Self {
            board: *game.board(),
            status: game.status(),
        }
    }
}

/// One game between a human and the search.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    computer: Player,
}

impl Session {
    /// Creates a session where the computer plays O.
    pub fn new() -> Self {
        Self::with_computer(Player::O)
    }

    /// Creates a session where the computer plays `computer`.
    ///
    /// With the computer as X it moves first; call
    /// [`computer_move`](Self::computer_move) before waiting for input.
    #[instrument]
    pub fn with_computer(computer: Player) -> Self {
        info!(%computer, "Creating session");
        Self {
            game: GameState::new(),
            computer,
        }
    }

    /// The computer's mark.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }

    /// The underlying game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current board and status.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.game)
    }

    /// True when the game is running and the computer is to move.
    pub fn awaiting_computer(&self) -> bool {
        self.game.status() == GameStatus::InProgress(self.computer)
    }

    /// Human move request.
    ///
    /// Returns the new snapshot, or `None` if the request was ignored.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, index: usize) -> Option<Snapshot> {
        if self.awaiting_computer() {
            debug!("Ignoring move request: computer to move");
            return None;
        }

        match self.game.apply_move(index) {
            Ok(status) => {
                debug!(%status, "Human move accepted");
                Some(self.snapshot())
            }
            Err(e) => {
                debug!(error = %e, "Ignoring move request");
                None
            }
        }
    }

    /// Plays the computer's move, if it is the computer's turn.
    ///
    /// Runs synchronously with no delay; pacing is the caller's concern.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Option<Snapshot> {
        if !self.awaiting_computer() {
            return None;
        }

        let choice = best_move(self.game.board(), self.computer)?;
        match self.game.apply_move(choice.position.to_index()) {
            Ok(status) => {
                info!(position = %choice.position, score = choice.score, %status, "Computer moved");
                Some(self.snapshot())
            }
            Err(e) => {
                warn!(error = %e, position = %choice.position, "Search chose an illegal move");
                None
            }
        }
    }

    /// Starts over; returns the fresh snapshot.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) -> Snapshot {
        self.game.reset();
        self.snapshot()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
