//! Checkers - Unified CLI
//!
//! Two players share one terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use checkers::{GameSettings, Prompter, Session};
use checkers_core::{BoardSize, Players, Storage, render};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            player_one,
            player_two,
            size,
            storage,
            config,
        } => run_play(
            GameSettings::new(player_one, player_two, size, storage),
            config,
        ),
        Command::Show {
            size,
            storage,
            player_one,
            player_two,
        } => run_show(size, storage, player_one, player_two),
    }
}

/// Logs go to stderr; stdout carries the game.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Run interactive games on stdin/stdout
#[instrument(skip(flags))]
fn run_play(flags: GameSettings, config: Option<PathBuf>) -> Result<()> {
    let settings = match config {
        Some(path) => flags.or(GameSettings::from_file(&path)?),
        None => flags,
    };
    settings.validate()?;
    info!(?settings, "Starting session");

    let stdin = std::io::stdin();
    let prompter = Prompter::new(stdin.lock(), std::io::stdout());
    Session::new(prompter, settings).run()
}

/// Print a fresh board
fn run_show(size: BoardSize, storage: Storage, one: char, two: char) -> Result<()> {
    let players = Players::new(one, two)?;
    let board = storage.build(size, players);
    print!("{}", render(board.as_ref()));

    for (piece, count) in board.piece_counts().iter() {
        println!("{}: {}", players.symbol(piece), count);
    }
    Ok(())
}
