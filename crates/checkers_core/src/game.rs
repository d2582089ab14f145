//! Turn engine for a single checkers session.

use crate::board::{BoardError, CheckerBoard};
use crate::direction::Direction;
use crate::filter::{filter_valid_directions, is_jump};
use crate::piece::Player;
use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The player captured every opposing piece.
    Won(Player),
}

/// A rejected turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The position does not hold a piece of the player to move.
    #[display("{} does not hold a piece of {}", _0, _1)]
    NotYourPiece(Position, Player),

    /// The direction is not legal for the selected piece.
    #[display("{} is not a legal direction from {}", _0, _1)]
    IllegalDirection(Direction, Position),

    /// The board refused the write.
    #[display("Board error: {}", _0)]
    Board(BoardError),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

/// What a completed turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Who moved.
    pub player: Player,
    /// Where the piece started.
    pub from: Position,
    /// Where the piece ended up.
    pub to: Position,
    /// The captured piece's position, for jumps.
    pub captured: Option<Position>,
    /// Whether the piece became a king on this turn.
    pub crowned: bool,
    /// Status once the turn is applied.
    pub status: GameStatus,
}

/// A two-player game over any board storage.
#[derive(Debug)]
pub struct Game {
    board: Box<dyn CheckerBoard>,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Starts a game on `board`; player one moves first.
    #[instrument(skip(board), fields(size = %board.size()))]
    pub fn new(board: Box<dyn CheckerBoard>) -> Self {
        Self {
            board,
            to_move: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &dyn CheckerBoard {
        self.board.as_ref()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Legal directions for the current player's piece at `pos`.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotYourPiece`] when `pos` holds no piece of the player
    /// to move.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn legal_directions(&self, pos: Position) -> Result<Vec<Direction>, MoveError> {
        if !self.board.whats_at_pos(pos).is_owned_by(self.to_move) {
            return Err(MoveError::NotYourPiece(pos, self.to_move));
        }
        Ok(filter_valid_directions(
            self.board.as_ref(),
            self.to_move,
            pos,
        ))
    }

    /// Moves or jumps the current player's piece at `pos` in `dir`.
    ///
    /// A jump is taken whenever one is available in `dir`. The turn passes to
    /// the opponent unless the move wins the game.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play(&mut self, pos: Position, dir: Direction) -> Result<Turn, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.legal_directions(pos)?.contains(&dir) {
            return Err(MoveError::IllegalDirection(dir, pos));
        }

        let player = self.to_move;
        let was_king = self
            .board
            .whats_at_pos(pos)
            .piece()
            .is_some_and(|piece| piece.is_king());

        let (to, captured) = if is_jump(self.board.as_ref(), player, pos, dir) {
            (self.board.jump_piece(pos, dir)?, Some(pos.step(dir)))
        } else {
            (self.board.move_piece(pos, dir)?, None)
        };

        let crowned = !was_king
            && self
                .board
                .whats_at_pos(to)
                .piece()
                .is_some_and(|piece| piece.is_king());

        if self.board.check_player_win(player) {
            info!(?player, "Game won");
            self.status = GameStatus::Won(player);
        } else {
            self.to_move = player.opponent();
        }

        let turn = Turn {
            player,
            from: pos,
            to,
            captured,
            crowned,
            status: self.status,
        };
        debug!(?turn, "Turn applied");
        Ok(turn)
    }

    /// Forfeits the current player's turn.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn pass(&mut self) {
        self.to_move = self.to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSize, Storage};
    use crate::piece::{Piece, Players, Tile};

    fn game(storage: Storage) -> Game {
        Game::new(storage.build(BoardSize::new(8).unwrap(), Players::default()))
    }

    #[test]
    fn test_player_one_moves_first_and_turns_alternate() {
        for storage in [Storage::Dense, Storage::Sparse] {
            let mut game = game(storage);
            assert_eq!(game.to_move(), Player::One);

            let turn = game.play(Position::new(2, 2), Direction::SE).unwrap();
            assert_eq!(turn.to, Position::new(3, 3));
            assert_eq!(turn.captured, None);
            assert_eq!(game.to_move(), Player::Two);
        }
    }

    #[test]
    fn test_selecting_opponent_piece_rejected() {
        let game = game(Storage::Dense);
        assert_eq!(
            game.legal_directions(Position::new(5, 1)),
            Err(MoveError::NotYourPiece(Position::new(5, 1), Player::One))
        );
        assert!(game.legal_directions(Position::new(3, 1)).is_err());
    }

    #[test]
    fn test_illegal_direction_rejected() {
        let mut game = game(Storage::Sparse);
        assert_eq!(
            game.play(Position::new(2, 2), Direction::NE),
            Err(MoveError::IllegalDirection(Direction::NE, Position::new(2, 2)))
        );
        assert_eq!(game.to_move(), Player::One);
    }

    #[test]
    fn test_capture_removes_piece() {
        for storage in [Storage::Dense, Storage::Sparse] {
            let mut game = game(storage);
            game.play(Position::new(2, 2), Direction::SE).unwrap();
            game.play(Position::new(5, 5), Direction::NW).unwrap();
            // (4,4) now holds player two next to player one's (3,3)
            let turn = game.play(Position::new(3, 3), Direction::SE).unwrap();

            assert_eq!(turn.to, Position::new(5, 5));
            assert_eq!(turn.captured, Some(Position::new(4, 4)));
            assert_eq!(game.board().whats_at_pos(Position::new(4, 4)), Tile::Empty);
            assert_eq!(
                game.board().piece_counts().get(Piece::man(Player::Two)),
                11
            );
        }
    }

    #[test]
    fn test_pass_hands_over_turn() {
        let mut game = game(Storage::Dense);
        game.pass();
        assert_eq!(game.to_move(), Player::Two);
    }

    #[test]
    fn test_last_capture_wins_and_stops_play() {
        for storage in [Storage::Dense, Storage::Sparse] {
            let mut board = storage.build(BoardSize::new(8).unwrap(), Players::default());
            for (pos, _) in crate::board::starting_positions(board.size()) {
                board.place_piece(pos, None).unwrap();
            }
            board
                .place_piece(Position::new(2, 2), Some(Piece::man(Player::One)))
                .unwrap();
            board
                .place_piece(Position::new(3, 3), Some(Piece::man(Player::Two)))
                .unwrap();

            let mut game = Game::new(board);
            let turn = game.play(Position::new(2, 2), Direction::SE).unwrap();

            assert_eq!(turn.status, GameStatus::Won(Player::One));
            assert_eq!(game.status(), GameStatus::Won(Player::One));
            assert_eq!(
                game.play(Position::new(4, 4), Direction::SE),
                Err(MoveError::GameOver)
            );
        }
    }

    #[test]
    fn test_reaching_far_row_reports_crowning() {
        let mut board = Storage::Dense.build(BoardSize::new(8).unwrap(), Players::default());
        board.place_piece(Position::new(7, 1), None).unwrap();
        board
            .place_piece(Position::new(6, 2), Some(Piece::man(Player::One)))
            .unwrap();

        let mut game = Game::new(board);
        let turn = game.play(Position::new(6, 2), Direction::SW).unwrap();

        assert!(turn.crowned);
        assert_eq!(
            game.board().whats_at_pos(Position::new(7, 1)),
            Tile::Occupied(Piece::king(Player::One))
        );
    }
}
