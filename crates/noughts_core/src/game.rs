//! Authoritative game state: board, mover, and status.

use super::error::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{check_winner, is_full};
use super::types::{Board, GameStatus, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Each instance is independent; nothing is shared between games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Position>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress(Player::X),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True while moves are still accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_over()
    }

    /// Places the current mover's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the state untouched, when the game is
    /// over, the index is out of range, or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            debug!(status = %self.status, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);

        let status = self.evaluate_termination();

        if cfg!(debug_assertions) {
            self.assert_invariants(pos);
        }

        debug!(position = %pos, %status, "Move applied");
        Ok(status)
    }

    /// Recomputes the status after a mark was placed.
    ///
    /// A completed line wins for the player who just moved; otherwise a
    /// full board is a draw; otherwise the turn passes.
    fn evaluate_termination(&mut self) -> GameStatus {
        self.status = if check_winner(&self.board).is_some() {
            GameStatus::Won(self.to_move)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            self.to_move = self.to_move.opponent();
            GameStatus::InProgress(self.to_move)
        };

        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game finished");
        }
        self.status
    }

    /// Panics naming every broken invariant.
    fn assert_invariants(&self, pos: Position) {
        if let Err(violations) = GameInvariants::check_all(self) {
            let broken: Vec<String> = violations.iter().map(ToString::to_string).collect();
            panic!(
                "Game invariants violated after move at {pos}: {}",
                broken.join("; ")
            );
        }
    }

    /// Returns to the initial state: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
