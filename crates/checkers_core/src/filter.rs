//! Legal direction filtering for a selected piece.
//!
//! Pure functions over any [`CheckerBoard`]: they read the board and never
//! mutate it.

use crate::board::{CheckerBoard, JUMP_DISTANCE};
use crate::direction::Direction;
use crate::piece::{Piece, Player, Tile};
use crate::position::Position;
use tracing::{instrument, trace};

/// Directions the piece at `pos` may take, as either a step or a jump.
///
/// Kings consider all four diagonals; men consider `player`'s two forward
/// diagonals. A direction is kept when the neighbouring tile is free, or when
/// [`is_jump`] holds for it. Each direction appears once, in table order.
#[instrument(skip(board))]
pub fn filter_valid_directions(
    board: &dyn CheckerBoard,
    player: Player,
    pos: Position,
) -> Vec<Direction> {
    let candidates: &[Direction] = match board.whats_at_pos(pos) {
        Tile::Occupied(piece) if piece.is_king() => &Direction::ALL,
        _ => board.viable_directions().get(Piece::man(player)),
    };

    let valid: Vec<Direction> = candidates
        .iter()
        .copied()
        .filter(|&dir| is_step(board, pos, dir) || is_jump(board, player, pos, dir))
        .collect();
    trace!(?valid, "Filtered directions");
    valid
}

/// Whether a piece of `player` at `start` can capture in `dir`: the
/// neighbour holds an opponent piece of either rank and the tile beyond it
/// is on the board and empty.
pub fn is_jump(board: &dyn CheckerBoard, player: Player, start: Position, dir: Direction) -> bool {
    let landing = start.offset(dir, JUMP_DISTANCE);
    board.in_bounds(landing)
        && board.whats_at_pos(start.step(dir)).is_owned_by(player.opponent())
        && board.whats_at_pos(landing).is_empty()
}

fn is_step(board: &dyn CheckerBoard, start: Position, dir: Direction) -> bool {
    let next = start.step(dir);
    board.in_bounds(next) && board.whats_at_pos(next).is_empty()
}
