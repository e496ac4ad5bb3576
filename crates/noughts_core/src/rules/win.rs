//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight lines that win the game: rows, columns, diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first completed line,
/// `None` otherwise. Called at every node of the move search, so it
/// is not instrumented.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_LINES {
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_line(line: [Position; 3], player: Player) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in WIN_LINES {
            for player in [Player::X, Player::O] {
                let board = board_with_line(line, player);
                assert_eq!(check_winner(&board), Some(player), "{line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board: Board = "XXO______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_diagonal_through_last_move() {
        let board: Board = "XOX OXO __X".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
