//! Balanced marks invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: alternating play keeps the mark counts balanced.
///
/// X moves first, so the X count equals the O count or exceeds it by one.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
