//! Checkers board logic for square boards from 8x8 to 16x16.
//!
//! # Architecture
//!
//! - **Board**: the [`CheckerBoard`] contract with two storage strategies,
//!   [`DenseBoard`] (full grid) and [`SparseBoard`] (per-class position sets)
//! - **Filter**: legal direction and jump detection for a selected piece
//! - **Game**: turn sequencing, capture, crowning and win detection
//! - **Render**: the labelled text grid shown to players
//!
//! # Example
//!
//! ```
//! use checkers_core::{BoardSize, Direction, Game, Players, Position, Storage};
//!
//! let players = Players::new('x', 'o').unwrap();
//! let board = Storage::Sparse.build(BoardSize::new(8).unwrap(), players);
//! let mut game = Game::new(board);
//!
//! let turn = game.play(Position::new(2, 2), Direction::SE).unwrap();
//! assert_eq!(turn.to, Position::new(3, 3));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod direction;
mod filter;
mod game;
mod piece;
mod position;
mod render;

pub use board::{
    BoardError, BoardSize, CheckerBoard, DenseBoard, JUMP_DISTANCE, PieceCounts, SizeError,
    SparseBoard, Storage, ViableDirections, starting_positions,
};
pub use direction::{Direction, get_direction};
pub use filter::{filter_valid_directions, is_jump};
pub use game::{Game, GameStatus, MoveError, Turn};
pub use piece::{DEAD_TILE, EMPTY_POS, Piece, Player, Players, Rank, SymbolError, Tile};
pub use position::Position;
pub use render::{BoardView, render};
