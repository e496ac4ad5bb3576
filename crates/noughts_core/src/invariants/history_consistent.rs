//! History consistency invariant: history matches occupied squares.

use super::Invariant;
use crate::GameState;

/// Invariant: every occupied square was played exactly once.
///
/// History length equals the number of occupied squares, and each
/// recorded position is occupied.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != crate::Square::Empty)
            .count();

        game.history().len() == occupied
            && game.history().iter().all(|pos| !game.board().is_empty(*pos))
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
