//! Grid-backed board.

use super::{
    BoardError, BoardSize, CheckerBoard, PieceCounts, ViableDirections, check_writable, settle,
    starting_positions,
};
use crate::piece::{Piece, Players, Tile};
use crate::position::Position;
use tracing::{instrument, trace};

/// A board stored as a full `D x D` grid of tiles.
///
/// Dead tiles are stored explicitly, so every read is a direct index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBoard {
    size: BoardSize,
    players: Players,
    grid: Vec<Vec<Tile>>,
    counts: PieceCounts,
    viable: ViableDirections,
}

impl DenseBoard {
    /// Creates a board with both players on their starting rows.
    #[instrument]
    pub fn new(size: BoardSize, players: Players) -> Self {
        let dim = size.get() as i32;
        let grid = (0..dim)
            .map(|row| {
                (0..dim)
                    .map(|col| {
                        if Position::new(row, col).is_playable() {
                            Tile::Empty
                        } else {
                            Tile::Dead
                        }
                    })
                    .collect()
            })
            .collect();

        let mut board = Self {
            size,
            players,
            grid,
            counts: PieceCounts::default(),
            viable: ViableDirections::standard(),
        };
        for (pos, owner) in starting_positions(size) {
            let piece = Piece::man(owner);
            *board.cell_mut(pos) = Tile::Occupied(piece);
            board.counts.add(piece);
        }
        board
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Tile {
        &mut self.grid[pos.row() as usize][pos.col() as usize]
    }
}

impl CheckerBoard for DenseBoard {
    fn size(&self) -> BoardSize {
        self.size
    }

    fn players(&self) -> Players {
        self.players
    }

    fn piece_counts(&self) -> &PieceCounts {
        &self.counts
    }

    fn viable_directions(&self) -> &ViableDirections {
        &self.viable
    }

    fn whats_at_pos(&self, pos: Position) -> Tile {
        if !self.size.contains(pos) {
            return Tile::Dead;
        }
        self.grid[pos.row() as usize][pos.col() as usize]
    }

    fn place_piece(&mut self, pos: Position, piece: Option<Piece>) -> Result<(), BoardError> {
        check_writable(self.size, pos)?;
        let stored = piece.map(|piece| settle(piece, pos, self.size));
        let cell = self.cell_mut(pos);
        let previous = cell.piece();
        *cell = Tile::from(stored);
        self.counts.replace(previous, stored);
        trace!(%pos, ?previous, ?stored, "Placed on grid");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Player;

    fn board() -> DenseBoard {
        DenseBoard::new(BoardSize::new(8).unwrap(), Players::default())
    }

    #[test]
    fn test_grid_tiles_dead_by_parity() {
        let board = board();
        assert_eq!(board.whats_at_pos(Position::new(0, 1)), Tile::Dead);
        assert_eq!(board.whats_at_pos(Position::new(3, 1)), Tile::Empty);
        assert_eq!(
            board.whats_at_pos(Position::new(0, 0)),
            Tile::Occupied(Piece::man(Player::One))
        );
    }

    #[test]
    fn test_off_board_reads_dead() {
        let board = board();
        assert_eq!(board.whats_at_pos(Position::new(-1, 1)), Tile::Dead);
        assert_eq!(board.whats_at_pos(Position::new(8, 0)), Tile::Dead);
    }

    #[test]
    fn test_place_rejects_dead_and_off_board() {
        let mut board = board();
        let before = board.clone();
        let one = Some(Piece::man(Player::One));

        assert_eq!(
            board.place_piece(Position::new(0, 1), one),
            Err(BoardError::DeadTile(Position::new(0, 1)))
        );
        assert_eq!(
            board.place_piece(Position::new(8, 8), one),
            Err(BoardError::OutOfBounds(Position::new(8, 8)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_counts_follow_overwrites() {
        let mut board = board();
        let pos = Position::new(3, 3);

        board
            .place_piece(pos, Some(Piece::king(Player::One)))
            .unwrap();
        assert_eq!(board.piece_counts().get(Piece::king(Player::One)), 1);

        board
            .place_piece(pos, Some(Piece::man(Player::Two)))
            .unwrap();
        assert_eq!(board.piece_counts().get(Piece::king(Player::One)), 0);
        assert_eq!(board.piece_counts().get(Piece::man(Player::Two)), 13);
    }
}
