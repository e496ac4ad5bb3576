//! Interactive play loop.
//!
//! The terminal is the front end: each line of input becomes a move or
//! reset request on a [`Session`], and each resulting [`Snapshot`] is
//! printed. The computer's reply is paced with an optional delay.

use anyhow::{Context, Result};
use noughts_core::{Player, Position, Session, Snapshot, rank_moves};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// How an interactive game is run.
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Pause before each computer move.
    pub delay: Duration,
    /// Mark the computer plays.
    pub computer: Player,
    /// Print snapshots as JSON lines.
    pub json: bool,
}

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at this index.
    Move(usize),
    /// Show every move with its score.
    Hint,
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses one line of input.
    ///
    /// Moves are accepted as an index or a position label. Indices out of
    /// range still parse as moves; the session ignores them.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "reset" | "new" => Input::Reset,
            "h" | "hint" | "?" => Input::Hint,
            _ => {
                if let Ok(index) = trimmed.parse::<usize>() {
                    Input::Move(index)
                } else if let Some(pos) = Position::from_label_or_number(trimmed) {
                    Input::Move(pos.to_index())
                } else {
                    Input::Unknown(trimmed.to_string())
                }
            }
        }
    }
}

/// Runs an interactive game until the user quits or stdin closes.
#[instrument(skip_all, fields(computer = %options.computer, delay_ms = options.delay.as_millis() as u64))]
pub async fn run_play(options: PlayOptions) -> Result<()> {
    info!("Starting interactive game");

    let mut session = Session::with_computer(options.computer);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !options.json {
        println!(
            "You are {}. Enter a square (0-8 or a name like \"center\"), \"hint\", \"reset\" or \"quit\".",
            session.human()
        );
    }
    render(&session.snapshot(), options.json)?;

    loop {
        if session.awaiting_computer() {
            if !options.delay.is_zero() {
                tokio::time::sleep(options.delay).await;
            }
            let snapshot = session
                .computer_move()
                .context("Computer had no move to play")?;
            render(&snapshot, options.json)?;
            continue;
        }

        if !options.json {
            print!("> ");
            std::io::stdout().flush().context("Failed to flush stdout")?;
        }

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            info!("Input closed");
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        match Input::parse(&line) {
            Input::Quit => break,
            Input::Reset => render(&session.request_reset(), options.json)?,
            Input::Hint => print_hint(&session),
            Input::Move(index) => match session.request_move(index) {
                Some(snapshot) => render(&snapshot, options.json)?,
                None => {
                    debug!(index, "Move request ignored");
                    if !options.json {
                        println!("{}", rejection_message(&session, index));
                    }
                }
            },
            Input::Unknown(text) => {
                warn!(input = %text, "Unrecognized input");
                if !options.json {
                    println!("Unrecognized input: {text}");
                }
            }
        }
    }

    info!("Leaving interactive game");
    Ok(())
}

/// Prints a snapshot as a grid or as one JSON line.
pub fn render(snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(snapshot).context("Failed to serialize snapshot")?;
        println!("{line}");
    } else {
        println!("\n{snapshot}\n");
    }
    Ok(())
}

/// Explains why a move request was ignored.
fn rejection_message(session: &Session, index: usize) -> String {
    if !session.game().is_active() {
        return "The game is over. Type \"reset\" to play again.".to_string();
    }
    match Position::from_index(index) {
        Some(pos) => format!("Square {index} ({pos}) is taken."),
        None => format!("Square {index} is off the board; choose 0-8."),
    }
}

fn print_hint(session: &Session) {
    let game = session.game();
    if !game.is_active() {
        println!("The game is over.");
        return;
    }
    for scored in rank_moves(game.board(), game.to_move()) {
        println!(
            "{} ({}): {}",
            scored.position.to_index(),
            scored.position,
            outcome_label(scored.score, game.to_move())
        );
    }
}

/// Describes a score from the mover's point of view.
fn outcome_label(score: i32, mover: Player) -> &'static str {
    let for_mover = match mover {
        Player::O => score,
        Player::X => -score,
    };
    match for_mover.signum() {
        1 => "wins",
        -1 => "loses",
        _ => "draws",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{O_WIN_SCORE, X_WIN_SCORE};

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("quit"), Input::Quit);
        assert_eq!(Input::parse(" Q "), Input::Quit);
        assert_eq!(Input::parse("reset"), Input::Reset);
        assert_eq!(Input::parse("?"), Input::Hint);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(Input::parse("4"), Input::Move(4));
        assert_eq!(Input::parse("center"), Input::Move(4));
        assert_eq!(Input::parse("bottom right"), Input::Move(8));
        assert_eq!(Input::parse("12"), Input::Move(12));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Input::parse("banana"), Input::Unknown("banana".to_string()));
        assert_eq!(Input::parse("top"), Input::Unknown("top".to_string()));
    }

    #[test]
    fn test_rejected_moves_are_explained() {
        let mut session = Session::with_computer(Player::O);
        session.request_move(4).unwrap();
        session.computer_move().unwrap();

        assert_eq!(session.request_move(4), None);
        assert_eq!(rejection_message(&session, 4), "Square 4 (Center) is taken.");

        assert_eq!(session.request_move(12), None);
        assert_eq!(
            rejection_message(&session, 12),
            "Square 12 is off the board; choose 0-8."
        );
    }

    #[test]
    fn test_rejection_after_game_over() {
        let mut session = Session::with_computer(Player::O);
        // Human as X; the computer wins or draws, either way the game ends.
        while session.game().is_active() {
            if session.awaiting_computer() {
                session.computer_move().unwrap();
            } else {
                let open = session.game().board().empty_positions().next().unwrap();
                session.request_move(open.to_index()).unwrap();
            }
        }
        assert_eq!(session.request_move(0), None);
        assert!(rejection_message(&session, 0).starts_with("The game is over."));
    }

    #[test]
    fn test_outcome_labels_follow_mover() {
        assert_eq!(outcome_label(O_WIN_SCORE, Player::O), "wins");
        assert_eq!(outcome_label(O_WIN_SCORE, Player::X), "loses");
        assert_eq!(outcome_label(X_WIN_SCORE, Player::X), "wins");
        assert_eq!(outcome_label(0, Player::X), "draws");
    }
}
