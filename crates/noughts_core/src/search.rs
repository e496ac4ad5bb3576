//! Exhaustive minimax over the tic-tac-toe game tree.
//!
//! Only terminal positions are scored: an X line is [`X_WIN_SCORE`], an O
//! line is [`O_WIN_SCORE`], a full board is [`DRAW_SCORE`]. O maximizes and
//! X minimizes. There is no pruning, no depth limit and no depth weighting,
//! so a quick win and a slow win are worth the same. Among candidates with
//! the extreme score the lowest index is chosen: a later candidate replaces
//! the incumbent only when strictly better.
//!
//! The caller's board is never touched. Each search copies the board and
//! places and removes marks on that copy.

use super::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal score when X has completed a line.
pub const X_WIN_SCORE: i32 = -10;

/// Terminal score when O has completed a line.
pub const O_WIN_SCORE: i32 = 10;

/// Terminal score for a full board without a line.
pub const DRAW_SCORE: i32 = 0;

/// A candidate move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Square the mover would play.
    pub position: Position,
    /// Value of the position after the move, under optimal play.
    pub score: i32,
}

/// Scores a terminal board, or `None` if play continues.
pub fn terminal_score(board: &Board) -> Option<i32> {
    match check_winner(board) {
        Some(Player::X) => Some(X_WIN_SCORE),
        Some(Player::O) => Some(O_WIN_SCORE),
        None if is_full(board) => Some(DRAW_SCORE),
        None => None,
    }
}

/// Returns the optimal move for `player`.
///
/// `None` when the board is already terminal; there is nothing to play.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, player: Player) -> Option<ScoredMove> {
    let mut scratch = *board;
    let choice = select(&mut scratch, player);
    debug!(?choice, "Search complete");
    choice
}

/// Minimax value of `board` with `player` to move.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let mut scratch = *board;
    minimax(&mut scratch, player)
}

/// Every legal move for `player` with its score, in ascending index order.
///
/// Empty when the board is terminal.
#[instrument(skip(board), fields(board = %board))]
pub fn rank_moves(board: &Board, player: Player) -> Vec<ScoredMove> {
    if terminal_score(board).is_some() {
        return Vec::new();
    }

    let mut scratch = *board;
    let open = scratch;
    open.empty_positions()
        .map(|position| ScoredMove {
            position,
            score: score_after(&mut scratch, position, player),
        })
        .collect()
}

fn minimax(board: &mut Board, player: Player) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }
    // A non-terminal board has an empty square, so selection succeeds.
    select(board, player).map_or(DRAW_SCORE, |choice| choice.score)
}

fn select(board: &mut Board, player: Player) -> Option<ScoredMove> {
    if terminal_score(board).is_some() {
        return None;
    }

    let open = *board;
    let mut best: Option<ScoredMove> = None;
    for position in open.empty_positions() {
        let score = score_after(board, position, player);
        let replace = match best {
            Some(incumbent) => improves(player, score, incumbent.score),
            None => true,
        };
        if replace {
            best = Some(ScoredMove { position, score });
        }
    }
    best
}

/// Plays `position`, scores the reply, and takes the mark back.
fn score_after(board: &mut Board, position: Position, player: Player) -> i32 {
    board.set(position, Square::Occupied(player));
    let score = minimax(board, player.opponent());
    board.set(position, Square::Empty);
    score
}

fn improves(player: Player, score: i32, incumbent: i32) -> bool {
    match player {
        Player::O => score > incumbent,
        Player::X => score < incumbent,
    }
}
