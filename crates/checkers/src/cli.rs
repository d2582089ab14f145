//! Command-line interface for checkers.

use checkers_core::{BoardSize, Storage};
use clap::{Parser, Subcommand};

/// Checkers - Two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "checkers")]
#[command(about = "Two-player checkers on boards from 8x8 to 16x16", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive games until the players stop
    Play {
        /// Player one's piece letter (prompted if omitted)
        #[arg(long)]
        player_one: Option<char>,

        /// Player two's piece letter (prompted if omitted)
        #[arg(long)]
        player_two: Option<char>,

        /// Board side length: 8, 10, 12, 14 or 16 (prompted if omitted)
        #[arg(long, value_parser = parse_size)]
        size: Option<BoardSize>,

        /// Board storage: dense (f) or sparse (m) (prompted if omitted)
        #[arg(long)]
        storage: Option<Storage>,

        /// Path to a settings file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print a freshly set up board and exit
    Show {
        /// Board side length
        #[arg(long, default_value = "8", value_parser = parse_size)]
        size: BoardSize,

        /// Board storage
        #[arg(long, default_value = "dense")]
        storage: Storage,

        /// Player one's piece letter
        #[arg(long, default_value = "x")]
        player_one: char,

        /// Player two's piece letter
        #[arg(long, default_value = "o")]
        player_two: char,
    },
}

fn parse_size(value: &str) -> Result<BoardSize, String> {
    let dim: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    BoardSize::new(dim).map_err(|e| e.to_string())
}
