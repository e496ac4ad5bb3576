//! One-shot commands: `best-move` and `self-play`.

use crate::play::render;
use anyhow::{Context, Result, bail};
use noughts_core::{Board, GameState, GameStatus, Player, Snapshot, best_move};
use tracing::{info, instrument};

/// The side to move on a board reached by alternating play from X.
pub fn infer_mover(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Prints the optimal move for `board`.
#[instrument]
pub fn run_best_move(board: &str, player: Option<Player>) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let player = player.unwrap_or_else(|| infer_mover(&board));

    let Some(choice) = best_move(&board, player) else {
        bail!("Board {board} is already decided; {player} has no move");
    };

    info!(%player, position = %choice.position, score = choice.score, "Best move found");
    println!(
        "{} ({}) score {}",
        choice.position.to_index(),
        choice.position,
        choice.score
    );
    Ok(())
}

/// Plays the search against itself from the empty board.
#[instrument]
pub fn run_self_play(json: bool) -> Result<GameStatus> {
    let mut game = GameState::new();
    render(&Snapshot::from(&game), json)?;

    while let GameStatus::InProgress(mover) = game.status() {
        let choice = best_move(game.board(), mover).context("Search found no move")?;
        game.apply_move(choice.position.to_index())
            .context("Search chose an illegal move")?;
        render(&Snapshot::from(&game), json)?;
    }

    info!(status = %game.status(), "Self-play finished");
    Ok(game.status())
}
