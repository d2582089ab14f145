//! Board coordinates.

use super::direction::Direction;
use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on a checkerboard.
///
/// Positions are plain values: they can point anywhere, including off the
/// board or at negative coordinates produced by stepping past an edge. Boards
/// bounds-check a position before touching storage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{row},{col}")]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Returns the row.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Returns the position `distance` steps away in `dir`.
    pub fn offset(self, dir: Direction, distance: i32) -> Self {
        let (d_row, d_col) = dir.delta();
        Self {
            row: self.row + d_row * distance,
            col: self.col + d_col * distance,
        }
    }

    /// Returns the adjacent position in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        self.offset(dir, 1)
    }

    /// Whether this is a playable (light) tile, i.e. row + col is even.
    ///
    /// Parity only; says nothing about whether the position is on the board.
    pub fn is_playable(&self) -> bool {
        (self.row + self.col).rem_euclid(2) == 0
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
