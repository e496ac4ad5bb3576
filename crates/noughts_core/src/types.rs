//! Core domain types for tic-tac-toe.

use crate::error::ParseBoardError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
    }

    /// Number of squares holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact nine-character form, `_` for empty squares.
///
/// This is the same form [`Board::from_str`] accepts.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in &self.squares {
            match square {
                Square::Empty => f.write_str("_")?,
                Square::Occupied(player) => write!(f, "{player}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells: `X`, `O` (either case) or one of `_ . -` for empty.
    /// Whitespace, `|` and `,` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut cells = 0;

        for ch in s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | ','))
        {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' => Square::Empty,
                other => return Err(ParseBoardError::UnknownCell(other)),
            };
            if let Some(pos) = Position::from_index(cells) {
                board.set(pos, square);
            }
            cells += 1;
        }

        if cells != 9 {
            return Err(ParseBoardError::CellCount(cells));
        }
        Ok(board)
    }
}

/// Current status of the game.
///
/// `Display` yields the status line shown to players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing; holds the player to move.
    #[display("Player {_0}'s turn")]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Player {_0} has won!")]
    Won(Player),
    /// Game ended in a draw.
    #[display("It's a tie!")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the player to move, if the game is still going.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_parse_board_with_separators() {
        let board: Board = "X,O,X, O,X,O, _,_,X".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::BottomLeft));
        assert_eq!(board.count(Player::X), 4);
        assert_eq!(board.count(Player::O), 3);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "XO_".parse::<Board>(),
            Err(ParseBoardError::CellCount(3))
        );
        assert_eq!(
            "XO_XO_XO_X".parse::<Board>(),
            Err(ParseBoardError::CellCount(10))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_cell() {
        assert_eq!(
            "XO_XO_XOZ".parse::<Board>(),
            Err(ParseBoardError::UnknownCell('Z'))
        );
    }

    #[test]
    fn test_compact_display_parses_back() {
        let board: Board = "x.o|.x.|o..".parse().unwrap();
        assert_eq!(board.to_string(), "X_O_X_O__");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_grid_display_numbers_free_cells() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_empty_positions_ascending() {
        let board: Board = "XO_X_O___".parse().unwrap();
        let indices: Vec<usize> = board.empty_positions().map(Position::to_index).collect();
        assert_eq!(indices, vec![2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(GameStatus::InProgress(Player::X).to_string(), "Player X's turn");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Player O has won!");
        assert_eq!(GameStatus::Draw.to_string(), "It's a tie!");
    }

    #[test]
    fn test_status_accessors() {
        let status = GameStatus::InProgress(Player::O);
        assert!(!status.is_over());
        assert_eq!(status.to_move(), Some(Player::O));
        assert_eq!(status.winner(), None);

        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Won(Player::X).winner(), Some(Player::X));
        assert_eq!(GameStatus::Won(Player::X).to_move(), None);
    }
}
