//! Edge cases: starting layouts, board edges and promotion.

use crate::board::{
    Board, BoardBuilder, BoardError, BoardSize, Move, MoveParseError, Rank, Side, Square,
};
use crate::engine::{Game, Player, TurnError};

fn humans() -> (Player, Player) {
    (
        Player::human(Side::First, "Alice"),
        Player::human(Side::Second, "Bob"),
    )
}

#[test]
fn test_starting_layout_per_size() {
    for (size, per_side) in [
        (BoardSize::Six, 6),
        (BoardSize::Eight, 12),
        (BoardSize::Ten, 20),
    ] {
        let board = Board::new(size);
        let n = size.dimension();
        let rows = size.rows_per_side();
        assert_eq!(board.count(Side::First), per_side, "{size}");
        assert_eq!(board.count(Side::Second), per_side, "{size}");

        for (_, piece) in board.live_pieces() {
            let sq = piece.square();
            assert!(sq.is_playable(), "{size} {sq}");
            assert_eq!(piece.rank(), Rank::Soldier);
            match piece.owner() {
                Side::First => assert!(sq.row() < rows),
                Side::Second => assert!(sq.row() >= n - rows),
            }
        }

        // two empty rows in the middle
        for row in rows..n - rows {
            for column in 0..n {
                assert!(board.is_empty(Square(row, column)));
            }
        }
        assert_eq!(n - 2 * rows, 2);
    }
}

#[test]
fn test_unsupported_dimensions() {
    for dimension in [0, 4, 7, 9, 12] {
        assert_eq!(
            Board::with_dimension(dimension),
            Err(BoardError::UnsupportedSize { size: dimension })
        );
    }
    assert_eq!(Board::with_dimension(10).unwrap().count(Side::First), 20);
}

#[test]
fn test_squares_outside_small_board() {
    let board = Board::new(BoardSize::Six);
    assert!(!board.contains(Square(6, 0)));
    assert!(!board.contains(Square(0, 6)));
    assert_eq!(board.piece_at(Square(9, 9)), None);
    assert!(BoardBuilder::new(BoardSize::Six)
        .piece(Square(7, 0), Side::First, Rank::Soldier)
        .build()
        .is_err());
}

#[test]
fn test_token_beyond_small_board_is_rejected() {
    let (first, second) = humans();
    let mut game = Game::new(BoardSize::Six, first, second);
    // Well formed, but nothing on a 6x6 board lives at Hh.
    let err = game.submit("Hh>Gg").unwrap_err();
    assert!(matches!(err, TurnError::InvalidMoveToken { reason: None, .. }));
}

#[test]
fn test_token_letters_past_ten_columns() {
    assert!(matches!(
        "Kb>Jc".parse::<Move>(),
        Err(MoveParseError::InvalidSquare { .. })
    ));
    assert!(matches!(
        "Ak>Bj".parse::<Move>(),
        Err(MoveParseError::InvalidSquare { .. })
    ));
}

#[test]
fn test_promotion_is_permanent() {
    let (first, second) = humans();
    let board = BoardBuilder::new(BoardSize::Six)
        .piece(Square(4, 1), Side::First, Rank::Soldier)
        .piece(Square(1, 4), Side::Second, Rank::Soldier)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, first, second, Side::First);

    game.submit("Be>Cf").unwrap();
    assert!(game.board().piece_at(Square(5, 2)).unwrap().is_king());

    game.submit("Eb>Fa").unwrap();
    assert!(game.board().piece_at(Square(0, 5)).unwrap().is_king());

    // stepping back off the far row keeps the crown
    game.submit("Cf>De").unwrap();
    assert!(game.board().piece_at(Square(4, 3)).unwrap().is_king());
}

#[test]
fn test_soldier_on_own_far_row_is_stuck() {
    let board = BoardBuilder::new(BoardSize::Eight)
        .piece(Square(7, 0), Side::First, Rank::Soldier)
        .build()
        .unwrap();
    assert!(board.generate_side_moves(Side::First).is_empty());
}
