//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_core::Player;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to the TOML config file (defaults apply if it is missing)
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Mark the computer plays
        #[arg(long, value_enum)]
        computer: Option<Mark>,

        /// Print each snapshot as a JSON line instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Print the optimal move for a board
    BestMove {
        /// Nine cells, e.g. "X_O_X____" (X, O, and _ . - for empty)
        board: String,

        /// Side to move (inferred from the mark counts if omitted)
        #[arg(short, long, value_enum)]
        player: Option<Mark>,
    },

    /// Let the search play both sides
    SelfPlay {
        /// Print each snapshot as a JSON line instead of a grid
        #[arg(long)]
        json: bool,
    },
}

/// A player mark as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Player X
    #[value(name = "X", alias = "x")]
    X,
    /// Player O
    #[value(name = "O", alias = "o")]
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}
