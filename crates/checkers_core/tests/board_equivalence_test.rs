//! Dense and sparse boards must be observationally identical.

use checkers_core::{
    BoardSize, CheckerBoard, DenseBoard, Direction, Piece, Player, Players, Position,
    SparseBoard, Tile,
};

fn all_positions(board: &dyn CheckerBoard) -> impl Iterator<Item = Position> + '_ {
    let dim = board.row_num() as i32;
    (-1..=dim).flat_map(move |row| (-1..=dim).map(move |col| Position::new(row, col)))
}

fn assert_same(dense: &DenseBoard, sparse: &SparseBoard) {
    for pos in all_positions(dense) {
        assert_eq!(dense.whats_at_pos(pos), sparse.whats_at_pos(pos), "at {pos}");
    }
    assert_eq!(dense.piece_counts(), sparse.piece_counts());
}

/// Counts every class by reading tiles, for comparison with `piece_counts`.
fn tally(board: &dyn CheckerBoard, piece: Piece) -> usize {
    all_positions(board)
        .filter(|pos| board.whats_at_pos(*pos) == Tile::Occupied(piece))
        .count()
}

fn assert_counts_consistent(board: &dyn CheckerBoard) {
    for piece in Piece::ALL {
        assert_eq!(
            board.piece_counts().get(piece),
            tally(board, piece),
            "{piece:?}"
        );
    }
}

#[test]
fn test_fresh_boards_match_for_every_size() {
    for dim in [8, 10, 12, 14, 16] {
        let size = BoardSize::new(dim).unwrap();
        let players = Players::new('r', 'b').unwrap();
        let dense = DenseBoard::new(size, players);
        let sparse = SparseBoard::new(size, players);

        assert_same(&dense, &sparse);
        let per_player = (dim / 2 - 1) * (dim / 2);
        assert_eq!(dense.piece_counts().get(Piece::man(Player::One)), per_player);
        assert_eq!(sparse.piece_counts().get(Piece::man(Player::Two)), per_player);
        assert_eq!(dense.piece_counts().get(Piece::king(Player::One)), 0);
    }
}

#[test]
fn test_same_mutations_keep_boards_identical() {
    let size = BoardSize::new(10).unwrap();
    let mut dense = DenseBoard::new(size, Players::default());
    let mut sparse = SparseBoard::new(size, Players::default());

    let script: Vec<Box<dyn Fn(&mut dyn CheckerBoard)>> = vec![
        Box::new(|b: &mut dyn CheckerBoard| {
            b.move_piece(Position::new(3, 3), Direction::SE).unwrap();
        }),
        Box::new(|b: &mut dyn CheckerBoard| {
            b.move_piece(Position::new(6, 6), Direction::NW).unwrap();
        }),
        Box::new(|b: &mut dyn CheckerBoard| {
            b.move_piece(Position::new(6, 2), Direction::NE).unwrap();
        }),
        Box::new(|b: &mut dyn CheckerBoard| {
            b.jump_piece(Position::new(4, 4), Direction::SW).unwrap();
        }),
        Box::new(|b: &mut dyn CheckerBoard| {
            b.place_piece(Position::new(9, 9), None).unwrap();
            b.place_piece(Position::new(9, 9), Some(Piece::man(Player::One)))
                .unwrap();
        }),
        Box::new(|b: &mut dyn CheckerBoard| {
            b.crown_piece(Position::new(0, 0)).unwrap();
        }),
    ];

    for step in &script {
        step(&mut dense);
        step(&mut sparse);
        assert_same(&dense, &sparse);
        assert_counts_consistent(&dense);
        assert_counts_consistent(&sparse);
    }
}

#[test]
fn test_counts_track_tiles_through_a_capture_sequence() {
    let size = BoardSize::new(8).unwrap();
    let boards: Vec<Box<dyn CheckerBoard>> = vec![
        Box::new(DenseBoard::new(size, Players::default())),
        Box::new(SparseBoard::new(size, Players::default())),
    ];

    for mut board in boards {
        board.move_piece(Position::new(2, 2), Direction::SE).unwrap();
        board.move_piece(Position::new(5, 5), Direction::NW).unwrap();
        board.jump_piece(Position::new(3, 3), Direction::SE).unwrap();
        board.jump_piece(Position::new(6, 6), Direction::NW).unwrap();

        assert_counts_consistent(board.as_ref());
        assert_eq!(board.piece_counts().remaining(Player::One), 11);
        assert_eq!(board.piece_counts().remaining(Player::Two), 11);
        assert_eq!(
            board.piece_counts().total(),
            all_positions(board.as_ref())
                .filter(|pos| board.whats_at_pos(*pos).piece().is_some())
                .count()
        );
    }
}
