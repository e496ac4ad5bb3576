//! Tic-tac-toe against an unbeatable computer.
//!
//! # Architecture
//!
//! - **GameState**: the board, the player to move, and the win/draw status
//! - **Search**: exhaustive minimax returning the optimal move for either side
//! - **Session**: the human-versus-computer contract a front end drives
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameStatus, Player, Position, Session};
//!
//! let mut session = Session::new();
//! session.request_move(Position::Center.to_index());
//! let reply = session.computer_move().unwrap();
//!
//! assert!(reply.board.get(Position::TopLeft) != noughts_core::Square::Empty);
//! assert_eq!(reply.status, GameStatus::InProgress(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod search;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use error::{MoveError, ParseBoardError};
pub use game::GameState;
pub use position::Position;
pub use rules::{WIN_LINES, check_winner, is_draw, is_full};
pub use search::{
    DRAW_SCORE, O_WIN_SCORE, ScoredMove, X_WIN_SCORE, best_move, evaluate, rank_moves,
    terminal_score,
};
pub use session::{Session, Snapshot};
pub use types::{Board, GameStatus, Player, Square};
