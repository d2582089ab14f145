//! Position-set board.

use super::{
    BoardError, BoardSize, CheckerBoard, PieceCounts, ViableDirections, check_writable, settle,
    starting_positions,
};
use crate::piece::{Piece, Players, Tile};
use crate::position::Position;
use std::collections::{HashMap, HashSet};
use tracing::{instrument, trace};

/// A board that only records where pieces are.
///
/// Each symbol class owns the set of positions it occupies. Empty and dead
/// tiles are implied by absence, so memory shrinks as pieces are captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseBoard {
    size: BoardSize,
    players: Players,
    occupied: HashMap<Piece, HashSet<Position>>,
    counts: PieceCounts,
    viable: ViableDirections,
}

impl SparseBoard {
    /// Creates a board with both players on their starting rows.
    #[instrument]
    pub fn new(size: BoardSize, players: Players) -> Self {
        let mut board = Self {
            size,
            players,
            occupied: Piece::ALL
                .into_iter()
                .map(|piece| (piece, HashSet::new()))
                .collect(),
            counts: PieceCounts::default(),
            viable: ViableDirections::standard(),
        };
        for (pos, owner) in starting_positions(size) {
            let piece = Piece::man(owner);
            board.positions_mut(piece).insert(pos);
            board.counts.add(piece);
        }
        board
    }

    /// Positions held by one symbol class.
    pub fn positions(&self, piece: Piece) -> impl Iterator<Item = Position> + '_ {
        self.occupied.get(&piece).into_iter().flatten().copied()
    }

    fn positions_mut(&mut self, piece: Piece) -> &mut HashSet<Position> {
        self.occupied.entry(piece).or_default()
    }
}

impl CheckerBoard for SparseBoard {
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
        if !self.size.contains(pos) || !pos.is_playable() {
            return Tile::Dead;
        }
        Piece::ALL
            .into_iter()
            .find(|piece| {
                self.occupied
                    .get(piece)
                    .is_some_and(|set| set.contains(&pos))
            })
            .map_or(Tile::Empty, Tile::Occupied)
    }

    fn place_piece(&mut self, pos: Position, piece: Option<Piece>) -> Result<(), BoardError> {
        check_writable(self.size, pos)?;
        let previous = self.whats_at_pos(pos).piece();
        if let Some(previous) = previous {
            self.positions_mut(previous).remove(&pos);
        }

        let stored = piece.map(|piece| settle(piece, pos, self.size));
        if let Some(stored) = stored {
            self.positions_mut(stored).insert(pos);
        }
        self.counts.replace(previous, stored);
        trace!(%pos, ?previous, ?stored, "Placed in position sets");
        Ok(())
    }
}
