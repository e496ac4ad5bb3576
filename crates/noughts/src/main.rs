//! Noughts - tic-tac-toe against an unbeatable computer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::NoughtsConfig;
use noughts_core::Player;
use play::PlayOptions;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config: config_path,
            delay_ms,
            computer,
            json,
        } => {
            // The filter comes from the config, so loading happens before
            // the subscriber exists; the outcome is logged here instead.
            let config = load_config(&config_path, delay_ms, computer.map(Player::from))?;
            init_tracing(config.log_filter());
            info!(path = %config_path.display(), ?config, "Configuration resolved");

            play::run_play(PlayOptions {
                delay: Duration::from_millis(*config.ai_delay_ms()),
                computer: *config.computer(),
                json,
            })
            .await
        }
        Command::BestMove { board, player } => {
            init_tracing("warn");
            commands::run_best_move(&board, player.map(Player::from))
        }
        Command::SelfPlay { json } => {
            init_tracing("warn");
            let status = commands::run_self_play(json)?;
            info!(%status, "Self-play result");
            Ok(())
        }
    }
}

/// Reads the config file (if any) and applies command-line overrides.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(
    path: &Path,
    delay_ms: Option<u64>,
    computer: Option<Player>,
) -> Result<NoughtsConfig> {
    let mut config = NoughtsConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if let Some(ms) = delay_ms {
        config = config.with_ai_delay_ms(ms);
    }
    if let Some(computer) = computer {
        config = config.with_computer(computer);
    }
    Ok(config)
}

/// Logs go to stderr so stdout carries only game output.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
