//! Static evaluation tests.

use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square};

#[test]
fn test_start_position_is_balanced() {
    assert_eq!(Board::new().evaluate(), 0);
}

#[test]
fn test_extra_white_material_scores_positive() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King) // e1
        .piece(Square(0, 4), Color::Black, Piece::King) // e8
        .piece(Square(4, 4), Color::White, Piece::Pawn) // e4
        .build();
    assert!(board.evaluate() > 0);
}

#[test]
fn test_extra_black_material_scores_negative() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King) // e1
        .piece(Square(0, 4), Color::Black, Piece::King) // e8
        .piece(Square(3, 4), Color::Black, Piece::Queen) // e5
        .build();
    assert!(board.evaluate() < 0);
}

#[test]
fn test_mirrored_positions_negate() {
    // Flipping every piece to the other color on the vertically mirrored
    // square must negate the score exactly.
    let position = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King) // e1
        .piece(Square(0, 4), Color::Black, Piece::King) // e8
        .piece(Square(4, 4), Color::White, Piece::Pawn) // e4
        .piece(Square(5, 2), Color::White, Piece::Knight) // c3
        .piece(Square(7, 0), Color::White, Piece::Rook) // a1
        .piece(Square(1, 3), Color::Black, Piece::Bishop) // d7
        .build();
    let mirrored = BoardBuilder::new()
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(3, 4), Color::Black, Piece::Pawn)
        .piece(Square(2, 2), Color::Black, Piece::Knight)
        .piece(Square(0, 0), Color::Black, Piece::Rook)
        .piece(Square(6, 3), Color::White, Piece::Bishop)
        .build();

    assert_eq!(position.evaluate(), -mirrored.evaluate());
}

#[test]
fn test_central_pawn_outscores_edge_pawn() {
    let central = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(4, 4), Color::White, Piece::Pawn) // e4
        .build();
    let edge = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(4, 0), Color::White, Piece::Pawn) // a4
        .build();

    assert!(central.evaluate() > edge.evaluate());
}

#[test]
fn test_capturing_a_queen_swings_the_score() {
    let mut board = BoardBuilder::new()
        .piece(Square(7, 7), Color::White, Piece::King) // h1
        .piece(Square(0, 7), Color::Black, Piece::King) // h8
        .piece(Square(7, 0), Color::White, Piece::Rook) // a1
        .piece(Square(1, 0), Color::Black, Piece::Queen) // a7
        .build();

    let before = board.evaluate();
    board.make_move(&Move::new(Square(7, 0), Square(1, 0), Piece::Rook));
    let after = board.evaluate();

    // A queen is worth 90; table shifts are an order of magnitude smaller.
    assert!(after - before >= 80, "expected a large swing, got {}", after - before);
}

#[test]
fn test_promotion_is_reflected_in_the_score() {
    let mut board = BoardBuilder::new()
        .piece(Square(1, 0), Color::White, Piece::Pawn) // a7
        .piece(Square(7, 7), Color::White, Piece::King)
        .piece(Square(3, 7), Color::Black, Piece::King)
        .build();

    let before = board.evaluate();
    board.make_move(&Move::promotion(Square(1, 0), Square(0, 0), Piece::Queen));
    assert!(board.evaluate() > before);
}
