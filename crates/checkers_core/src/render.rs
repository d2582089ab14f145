//! Text rendering of a board.

use crate::board::CheckerBoard;
use crate::position::Position;
use std::fmt;

/// Displays a board as a grid labelled with row and column numbers.
///
/// ```text
/// |  | 0| 1| 2|
/// |0 |x |* |x |
/// ```
///
/// Dead tiles show `*`, empty playable tiles a blank.
pub struct BoardView<'a>(pub &'a dyn CheckerBoard);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let players = board.players();

        write!(f, "|  |")?;
        for col in 0..board.col_num() {
            write!(f, "{col:>2}|")?;
        }
        writeln!(f)?;

        for row in 0..board.row_num() {
            write!(f, "|{row:<2}")?;
            for col in 0..board.col_num() {
                let tile = board.whats_at_pos(Position::new(row as i32, col as i32));
                write!(f, "|{} ", players.tile_symbol(tile))?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// Renders `board` to a string.
pub fn render(board: &dyn CheckerBoard) -> String {
    BoardView(board).to_string()
}
