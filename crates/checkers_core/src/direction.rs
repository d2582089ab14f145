//! Diagonal travel directions.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the four diagonal compass directions.
///
/// Row 0 is the top of the board, so "north" decreases the row.
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
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Up and to the right.
    NE,
    /// Up and to the left.
    NW,
    /// Down and to the right.
    SE,
    /// Down and to the left.
    SW,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// Unit `(Δrow, Δcol)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }
}

/// Returns the unit offset for `dir` as a position.
pub fn get_direction(dir: Direction) -> Position {
    let (row, col) = dir.delta();
    Position::new(row, col)
}
