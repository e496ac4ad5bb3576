//! Error types for moves and board parsing.

use super::Position;

/// Why a move was rejected.
///
/// A rejected move never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Board text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    CellCount(usize),

    /// A character that is not a mark or an empty marker.
    #[display("Unknown cell character {:?}", _0)]
    UnknownCell(char),
}

impl std::error::Error for ParseBoardError {}
