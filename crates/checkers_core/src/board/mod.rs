//! The board contract shared by both storage strategies.
//!
//! [`CheckerBoard`] asks implementors for a handful of primitives (read a
//! tile, write a tile, dimensions, counts, viable directions) and builds
//! crowning, moving, jumping, scanning and win detection on top of them as
//! default methods. [`DenseBoard`] keeps a full grid; [`SparseBoard`] keeps
//! one position set per symbol class. Both honour the same write contract:
//! writes are bounds-checked, men reaching the far row are crowned, and piece
//! counts always match the tiles.

mod dense;
mod sparse;

pub use dense::DenseBoard;
pub use sparse::SparseBoard;

use crate::direction::Direction;
use crate::piece::{Piece, Player, Players, Tile};
use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

/// Distance, in tiles, covered by a jump.
pub const JUMP_DISTANCE: i32 = 2;

/// Side length of a square board: even, from 8 through 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "usize", into = "usize")]
#[display("{}x{}", _0, _0)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported side length.
    pub const MIN: usize = 8;
    /// Largest supported side length.
    pub const MAX: usize = 16;

    /// Validates a side length.
    pub fn new(dimension: usize) -> Result<Self, SizeError> {
        if (Self::MIN..=Self::MAX).contains(&dimension) && dimension % 2 == 0 {
            Ok(Self(dimension))
        } else {
            Err(SizeError(dimension))
        }
    }

    /// The side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Whether `pos` lies on a board of this size.
    pub fn contains(self, pos: Position) -> bool {
        let dim = self.0 as i32;
        (0..dim).contains(&pos.row()) && (0..dim).contains(&pos.col())
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = SizeError;

    fn try_from(dimension: usize) -> Result<Self, Self::Error> {
        Self::new(dimension)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Unsupported board dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("board size must be an even number from 8 to 16, got {}", _0)]
pub struct SizeError(#[error(not(source))] pub usize);

/// Structural misuse of a board write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The position is not on the board.
    #[display("position {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Position),
    /// The position is an odd-parity tile.
    #[display("position {} is a dead tile", _0)]
    DeadTile(#[error(not(source))] Position),
    /// There is no piece to move.
    #[display("there is no piece at {}", _0)]
    NoPieceAt(#[error(not(source))] Position),
}

/// Live number of pieces in each symbol class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCounts([usize; 4]);

impl PieceCounts {
    /// Count for one symbol class.
    pub fn get(&self, piece: Piece) -> usize {
        self.0[piece.index()]
    }

    /// Pieces of either rank owned by `player`.
    pub fn remaining(&self, player: Player) -> usize {
        self.get(Piece::man(player)) + self.get(Piece::king(player))
    }

    /// Total pieces on the board.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Every class with its count.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, usize)> + '_ {
        Piece::ALL.into_iter().map(|piece| (piece, self.get(piece)))
    }

    pub(crate) fn add(&mut self, piece: Piece) {
        self.0[piece.index()] += 1;
    }

    /// Accounts for `previous` leaving a tile and `next` taking its place.
    pub(crate) fn replace(&mut self, previous: Option<Piece>, next: Option<Piece>) {
        if let Some(piece) = previous {
            let slot = &mut self.0[piece.index()];
            *slot = slot.saturating_sub(1);
        }
        if let Some(piece) = next {
            self.add(piece);
        }
    }
}

/// Directions each symbol class is allowed to travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViableDirections(HashMap<Piece, Vec<Direction>>);

impl ViableDirections {
    /// Men move forward only, kings move every way.
    pub fn standard() -> Self {
        use Direction::{NE, NW, SE, SW};
        let king = vec![SE, SW, NE, NW];
        Self(HashMap::from([
            (Piece::man(Player::One), vec![SE, SW]),
            (Piece::man(Player::Two), vec![NE, NW]),
            (Piece::king(Player::One), king.clone()),
            (Piece::king(Player::Two), king),
        ]))
    }

    /// Directions for one symbol class.
    pub fn get(&self, piece: Piece) -> &[Direction] {
        self.0.get(&piece).map(Vec::as_slice).unwrap_or_default()
    }
}

impl Default for ViableDirections {
    fn default() -> Self {
        Self::standard()
    }
}

/// Which storage strategy backs a board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Storage {
    /// Full grid; constant-time reads.
    #[default]
    #[strum(to_string = "dense", serialize = "fast", serialize = "f")]
    #[serde(alias = "fast")]
    Dense,
    /// Per-class position sets; memory proportional to the pieces left.
    #[strum(to_string = "sparse", serialize = "memory", serialize = "m")]
    #[serde(alias = "memory")]
    Sparse,
}

impl Storage {
    /// Builds a freshly laid out board with this storage.
    #[instrument]
    pub fn build(self, size: BoardSize, players: Players) -> Box<dyn CheckerBoard> {
        debug!(%size, storage = %self, "Building board");
        match self {
            Storage::Dense => Box::new(DenseBoard::new(size, players)),
            Storage::Sparse => Box::new(SparseBoard::new(size, players)),
        }
    }
}

/// Playable positions occupied at the start of a game, with their owners.
///
/// Player one fills rows `[0, D/2 - 1)`, player two fills rows `[D/2 + 1, D)`,
/// leaving two empty rows between them.
pub fn starting_positions(size: BoardSize) -> impl Iterator<Item = (Position, Player)> {
    let dim = size.get() as i32;
    (0..dim)
        .flat_map(move |row| (0..dim).map(move |col| Position::new(row, col)))
        .filter(Position::is_playable)
        .filter_map(move |pos| {
            if pos.row() < dim / 2 - 1 {
                Some((pos, Player::One))
            } else if pos.row() >= dim / 2 + 1 {
                Some((pos, Player::Two))
            } else {
                None
            }
        })
}

/// Rejects writes outside the board or onto dead tiles.
pub(crate) fn check_writable(size: BoardSize, pos: Position) -> Result<(), BoardError> {
    if !size.contains(pos) {
        Err(BoardError::OutOfBounds(pos))
    } else if !pos.is_playable() {
        Err(BoardError::DeadTile(pos))
    } else {
        Ok(())
    }
}

/// The piece actually stored when `piece` lands on `pos`: men on their
/// promotion row become kings.
pub(crate) fn settle(piece: Piece, pos: Position, size: BoardSize) -> Piece {
    if !piece.is_king() && pos.row() == piece.owner.promotion_row(size.get()) {
        piece.crowned()
    } else {
        piece
    }
}

/// A checkerboard.
///
/// Implementors supply the primitives; everything else is derived from them
/// and behaves identically whatever the storage.
pub trait CheckerBoard: std::fmt::Debug {
    /// Side length of the board.
    fn size(&self) -> BoardSize;

    /// The symbols chosen by the two players.
    fn players(&self) -> Players;

    /// Live count of each symbol class.
    fn piece_counts(&self) -> &PieceCounts;

    /// Allowed travel directions for each symbol class.
    fn viable_directions(&self) -> &ViableDirections;

    /// What `pos` holds. Off-board positions read as [`Tile::Dead`].
    fn whats_at_pos(&self, pos: Position) -> Tile;

    /// Writes `piece` at `pos`, or clears it when `piece` is `None`.
    ///
    /// Counts follow the write, and a man placed on its promotion row is
    /// stored as a king.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] or [`BoardError::DeadTile`]; the board is
    /// left untouched.
    fn place_piece(&mut self, pos: Position, piece: Option<Piece>) -> Result<(), BoardError>;

    /// Number of rows.
    fn row_num(&self) -> usize {
        self.size().get()
    }

    /// Number of columns.
    fn col_num(&self) -> usize {
        self.size().get()
    }

    /// Whether `pos` is on the board.
    fn in_bounds(&self, pos: Position) -> bool {
        self.size().contains(pos)
    }

    /// Replaces the piece at `pos` with its king form. Empty tiles are left
    /// alone.
    fn crown_piece(&mut self, pos: Position) -> Result<(), BoardError> {
        check_writable(self.size(), pos)?;
        match self.whats_at_pos(pos).piece() {
            Some(piece) => {
                debug!(%pos, ?piece, "Crowning piece");
                self.place_piece(pos, Some(piece.crowned()))
            }
            None => Ok(()),
        }
    }

    /// Moves the piece at `start` one step in `dir` and returns where it
    /// landed.
    ///
    /// Does not check that the destination is free; use the move filter
    /// first.
    fn move_piece(&mut self, start: Position, dir: Direction) -> Result<Position, BoardError> {
        let piece = self
            .whats_at_pos(start)
            .piece()
            .ok_or(BoardError::NoPieceAt(start))?;
        let destination = start.step(dir);
        check_writable(self.size(), destination)?;

        self.place_piece(start, None)?;
        self.place_piece(destination, Some(piece))?;
        debug!(from = %start, to = %destination, %dir, "Moved piece");
        Ok(destination)
    }

    /// Jumps the piece at `start` over its neighbour in `dir`, removing the
    /// neighbour, and returns the landing position.
    ///
    /// Does not check that the neighbour is an opponent or that the landing
    /// tile is free; use the move filter first.
    fn jump_piece(&mut self, start: Position, dir: Direction) -> Result<Position, BoardError> {
        let piece = self
            .whats_at_pos(start)
            .piece()
            .ok_or(BoardError::NoPieceAt(start))?;
        let middle = start.step(dir);
        let landing = start.offset(dir, JUMP_DISTANCE);
        check_writable(self.size(), landing)?;

        let jumped = self.whats_at_pos(middle).piece();
        self.place_piece(start, None)?;
        self.place_piece(middle, None)?;
        self.place_piece(landing, Some(piece))?;
        debug!(from = %start, over = %middle, to = %landing, ?jumped, "Jumped piece");
        Ok(landing)
    }

    /// Whether `player` has won, i.e. the opponent has no pieces left.
    fn check_player_win(&self, player: Player) -> bool {
        self.piece_counts().remaining(player.opponent()) == 0
    }

    /// What lies one step away in each direction that stays on the board.
    fn scan_surrounding_positions(&self, pos: Position) -> BTreeMap<Direction, Tile> {
        Direction::ALL
            .into_iter()
            .map(|dir| (dir, pos.step(dir)))
            .filter(|(_, neighbour)| self.in_bounds(*neighbour))
            .map(|(dir, neighbour)| (dir, self.whats_at_pos(neighbour)))
            .collect()
    }
}
