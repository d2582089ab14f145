//! Players, pieces, tiles and the symbols that represent them.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker shown for tiles that can never hold a piece.
pub const DEAD_TILE: char = '*';

/// Marker shown for empty playable tiles.
pub const EMPTY_POS: char = ' ';

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Starts at the top of the board and moves down.
    #[display("player one")]
    One,
    /// Starts at the bottom of the board and moves up.
    #[display("player two")]
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row on which this player's men are crowned.
    pub fn promotion_row(self, row_num: usize) -> i32 {
        match self {
            Player::One => row_num as i32 - 1,
            Player::Two => 0,
        }
    }
}

/// Whether a piece is a regular man or a king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Moves on its owner's two forward diagonals.
    Man,
    /// Moves on all four diagonals.
    King,
}

/// A piece on the board. The four values are the four symbol classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Who owns the piece.
    pub owner: Player,
    /// Man or king.
    pub rank: Rank,
}

impl Piece {
    /// Every symbol class, in the order sparse storage scans them.
    pub const ALL: [Piece; 4] = [
        Piece::man(Player::One),
        Piece::man(Player::Two),
        Piece::king(Player::One),
        Piece::king(Player::Two),
    ];

    /// A regular piece for `owner`.
    pub const fn man(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }

    /// A king for `owner`.
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    /// The king form of this piece.
    pub fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Whether this piece is a king.
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Dense index into per-class tables, matching [`Piece::ALL`].
    pub(crate) fn index(self) -> usize {
        match (self.owner, self.rank) {
            (Player::One, Rank::Man) => 0,
            (Player::Two, Rank::Man) => 1,
            (Player::One, Rank::King) => 2,
            (Player::Two, Rank::King) => 3,
        }
    }
}

/// What a board position holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Off the board or an odd-parity tile.
    Dead,
    /// A playable tile with nothing on it.
    Empty,
    /// A playable tile holding a piece.
    Occupied(Piece),
}

impl Tile {
    /// The piece on this tile, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Tile::Occupied(piece) => Some(piece),
            Tile::Dead | Tile::Empty => None,
        }
    }

    /// Whether this is an empty playable tile.
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Whether this tile holds a piece owned by `player`, man or king.
    pub fn is_owned_by(&self, player: Player) -> bool {
        matches!(self, Tile::Occupied(piece) if piece.owner == player)
    }
}

impl From<Option<Piece>> for Tile {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Tile::Empty, Tile::Occupied)
    }
}

/// Rejected piece symbol configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SymbolError {
    /// The symbol is not a lowercase ASCII letter.
    #[display("'{}' is not a single lowercase letter", _0)]
    NotLowercaseLetter(#[error(not(source))] char),
    /// Both players picked the same letter.
    #[display("both players chose '{}'", _0)]
    Duplicate(#[error(not(source))] char),
}

/// The letters the two players chose for their pieces.
///
/// A man is shown with its owner's lowercase letter and a king with the
/// uppercase form of the same letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Players {
    one: char,
    two: char,
}

impl Players {
    /// Validates and stores the two symbols.
    #[instrument]
    pub fn new(one: char, two: char) -> Result<Self, SymbolError> {
        Self::validate(one)?;
        Self::validate(two)?;
        if one == two {
            return Err(SymbolError::Duplicate(one));
        }
        Ok(Self { one, two })
    }

    /// Checks that a single symbol is usable by a player.
    pub fn validate(symbol: char) -> Result<(), SymbolError> {
        if symbol.is_ascii_lowercase() {
            Ok(())
        } else {
            Err(SymbolError::NotLowercaseLetter(symbol))
        }
    }

    /// The base (man) symbol of `player`.
    pub fn symbol_of(&self, player: Player) -> char {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// The symbol drawn for `piece`.
    pub fn symbol(&self, piece: Piece) -> char {
        let base = self.symbol_of(piece.owner);
        match piece.rank {
            Rank::Man => base,
            Rank::King => base.to_ascii_uppercase(),
        }
    }

    /// The symbol drawn for `tile`.
    pub fn tile_symbol(&self, tile: Tile) -> char {
        match tile {
            Tile::Dead => DEAD_TILE,
            Tile::Empty => EMPTY_POS,
            Tile::Occupied(piece) => self.symbol(piece),
        }
    }

    /// The player whose base symbol matches `symbol`, ignoring case.
    pub fn player_for(&self, symbol: char) -> Option<Player> {
        match symbol.to_ascii_lowercase() {
            s if s == self.one => Some(Player::One),
            s if s == self.two => Some(Player::Two),
            _ => None,
        }
    }

    /// The piece a symbol stands for; uppercase selects the king.
    pub fn piece_for(&self, symbol: char) -> Option<Piece> {
        let owner = self.player_for(symbol)?;
        Some(if symbol.is_ascii_uppercase() {
            Piece::king(owner)
        } else {
            Piece::man(owner)
        })
    }
}

impl Default for Players {
    fn default() -> Self {
        Self { one: 'x', two: 'o' }
    }
}
