//! Exhaustive checks of the search over every reachable position.

use noughts_core::{
    Board, DRAW_SCORE, GameState, GameStatus, Player, Session, Square, best_move, evaluate,
};
use std::collections::HashSet;

/// Every reachable position where play continues, with the player to move.
fn reachable_open_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut open = Vec::new();
    let mut stack = vec![GameState::new()];

    while let Some(game) = stack.pop() {
        if !seen.insert(*game.board()) {
            continue;
        }
        let GameStatus::InProgress(mover) = game.status() else {
            continue;
        };
        open.push((*game.board(), mover));

        for pos in game.board().empty_positions() {
            let mut next = game.clone();
            next.apply_move(pos.to_index()).expect("Empty square");
            stack.push(next);
        }
    }
    open
}

#[test]
fn test_reachable_space_size() {
    // 5478 legal positions, 958 of them terminal.
    assert_eq!(reachable_open_positions().len(), 5478 - 958);
}

#[test]
fn test_best_move_is_always_an_empty_square() {
    for (board, mover) in reachable_open_positions() {
        let choice = best_move(&board, mover).expect("Open position has a move");
        assert_eq!(
            board.get(choice.position),
            Square::Empty,
            "{board} with {mover} to move chose {}",
            choice.position
        );
        assert_eq!(choice.score, evaluate(&board, mover));
    }
}

#[test]
fn test_perfect_play_is_a_draw() {
    assert_eq!(evaluate(&Board::new(), Player::X), DRAW_SCORE);
}

/// Every X strategy against the computer playing O.
fn explore_against_computer(session: &Session, outcomes: &mut Vec<GameStatus>) {
    let status = session.snapshot().status;
    if status.is_over() {
        outcomes.push(status);
        return;
    }

    let board = session.snapshot().board;
    for pos in board.empty_positions() {
        let mut branch = session.clone();
        branch.request_move(pos.to_index()).expect("Human move accepted");
        if branch.awaiting_computer() {
            branch.computer_move().expect("Computer to move");
        }
        explore_against_computer(&branch, outcomes);
    }
}

#[test]
fn test_computer_never_loses_as_o() {
    let mut outcomes = Vec::new();
    explore_against_computer(&Session::new(), &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(
        outcomes.iter().all(|s| *s != GameStatus::Won(Player::X)),
        "X found a winning line against the search"
    );
    assert!(outcomes.contains(&GameStatus::Won(Player::O)));
    assert!(outcomes.contains(&GameStatus::Draw));
}

#[test]
fn test_computer_never_loses_as_x() {
    let mut session = Session::with_computer(Player::X);
    session.computer_move().expect("Computer opens");

    let mut outcomes = Vec::new();
    explore_against_computer(&session, &mut outcomes);

    assert!(outcomes.iter().all(|s| *s != GameStatus::Won(Player::O)));
}
