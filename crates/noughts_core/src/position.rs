//! Named board positions for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions, in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a board index (0-8) or a label.
    ///
    /// Labels are matched case-insensitively (`"center"`, `"bottom-right"`,
    /// `"top left"`). A partial label is accepted only when it is the prefix
    /// of exactly one label, so `"middle-l"` resolves but `"top"` does not.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = s.to_lowercase().replace(' ', "-");
        if let Some(exact) = <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == wanted)
        {
            return Some(exact);
        }

        let mut prefixed = <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| pos.label().to_lowercase().starts_with(&wanted));
        match (prefixed.next(), prefixed.next()) {
            (Some(pos), None) => Some(pos),
            _ => None,
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True for the four corner squares.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight
        )
    }

    /// True for the four edge (non-corner, non-center) squares.
    pub fn is_edge(self) -> bool {
        matches!(
            self,
            Position::TopCenter
                | Position::MiddleLeft
                | Position::MiddleRight
                | Position::BottomCenter
        )
    }

    /// True for the center square.
    pub fn is_center(self) -> bool {
        self == Position::Center
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        board.empty_positions().collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
