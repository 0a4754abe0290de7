//! Legal move generation tests.

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

#[test]
fn test_opening_position_has_twenty_moves() {
    let mut board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_black_has_twenty_replies_to_every_white_opening() {
    let mut board = Board::new();
    let white_moves = board.legal_moves(Color::White);

    for m in white_moves.iter() {
        board.make_move(m);
        assert_eq!(
            board.legal_moves(Color::Black).len(),
            20,
            "after {m}, Black should still have 20 replies"
        );
        board.undo_move();
    }
}

#[test]
fn test_move_order_is_stable() {
    let mut board = Board::new();
    let first = board.legal_moves(Color::White);
    let second = board.legal_moves(Color::White);
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn test_pawn_double_step_requires_both_squares_empty() {
    // A black knight parked on e4 blocks the double step but leaves the
    // single step e2-e3 available.
    let mut board = BoardBuilder::starting_position()
        .piece(Square(4, 4), Color::Black, Piece::Knight) // e4
        .build();

    let moves = board.legal_moves(Color::White);
    let from = Square(6, 4); // e2
    assert!(moves.find(from, Square(5, 4), None).is_some(), "e2e3");
    assert!(moves.find(from, Square(4, 4), None).is_none(), "e2e4 blocked");
}

#[test]
fn test_pawn_captures_diagonally_not_forward() {
    // White pawn e4, black pawn d5 (capturable) and black knight e5
    // (blocking, not capturable).
    let mut board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Pawn) // e4
        .piece(Square(3, 3), Color::Black, Piece::Pawn) // d5
        .piece(Square(3, 4), Color::Black, Piece::Knight) // e5
        .piece(Square(7, 7), Color::White, Piece::King)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();

    let moves = board.legal_moves(Color::White);
    let from = Square(4, 4);
    assert!(moves.find(from, Square(3, 3), None).is_some(), "exd5");
    assert!(moves.find(from, Square(3, 4), None).is_none(), "e5 blocked");
}

#[test]
fn test_promotion_yields_exactly_four_candidates() {
    let mut board = BoardBuilder::new()
        .piece(Square(1, 0), Color::White, Piece::Pawn) // a7
        .piece(Square(7, 7), Color::White, Piece::King)
        .piece(Square(3, 7), Color::Black, Piece::King)
        .build();

    let moves = board.legal_moves(Color::White);
    let promotions: Vec<_> = moves
        .iter()
        .filter(|m| m.from == Square(1, 0))
        .collect();

    assert_eq!(promotions.len(), 4);
    let mut promoted: Vec<Piece> = promotions.iter().filter_map(|m| m.promotion).collect();
    promoted.sort_by_key(|p| p.to_char());
    assert_eq!(
        promoted,
        vec![Piece::Bishop, Piece::Knight, Piece::Queen, Piece::Rook]
    );

    // Never a plain move onto the farthest rank.
    for m in moves.iter() {
        if m.piece == Piece::Pawn && m.to.0 == 0 {
            assert!(m.is_promotion());
        }
    }
}

#[test]
fn test_pinned_knight_has_no_moves() {
    // White knight e4 pinned against the king on e1 by a rook on e8.
    let mut board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King) // e1
        .piece(Square(4, 4), Color::White, Piece::Knight) // e4
        .piece(Square(0, 4), Color::Black, Piece::Rook) // e8
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();

    let moves = board.legal_moves(Color::White);
    assert!(
        moves.iter().all(|m| m.piece != Piece::Knight),
        "a pinned knight can never move"
    );
}

#[test]
fn test_pinned_rook_slides_only_along_the_pin() {
    // White rook e2 pinned on the e-file may still slide along it.
    let mut board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King) // e1
        .piece(Square(6, 4), Color::White, Piece::Rook) // e2
        .piece(Square(0, 4), Color::Black, Piece::Queen) // e8
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();

    let moves = board.legal_moves(Color::White);
    let rook_moves: Vec<_> = moves
        .iter()
        .filter(|m| m.piece == Piece::Rook)
        .collect();

    assert!(!rook_moves.is_empty());
    assert!(rook_moves.iter().all(|m| m.to.1 == 4));
    // Capturing the pinning queen is among them.
    assert!(moves.find(Square(6, 4), Square(0, 4), None).is_some());
}

#[test]
fn test_king_cannot_step_into_attacked_square() {
    let mut board = BoardBuilder::new()
        .piece(Square(7, 0), Color::White, Piece::King) // a1
        .piece(Square(0, 1), Color::Black, Piece::Rook) // b8
        .piece(Square(0, 7), Color::Black, Piece::King)
        .build();

    let moves = board.legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves.first().map(|m| m.to), Some(Square(6, 0))); // a2
}

#[test]
fn test_sliders_stop_at_blockers() {
    // Rook d4 with an own pawn on d6 and an enemy pawn on f4.
    let mut board = BoardBuilder::new()
        .piece(Square(4, 3), Color::White, Piece::Rook) // d4
        .piece(Square(2, 3), Color::White, Piece::Pawn) // d6
        .piece(Square(4, 5), Color::Black, Piece::Pawn) // f4
        .piece(Square(7, 7), Color::White, Piece::King)
        .piece(Square(0, 0), Color::Black, Piece::King)
        .build();

    let moves = board.legal_moves(Color::White);
    let from = Square(4, 3);
    assert!(moves.find(from, Square(3, 3), None).is_some(), "d5 open");
    assert!(moves.find(from, Square(2, 3), None).is_none(), "own pawn");
    assert!(moves.find(from, Square(1, 3), None).is_none(), "behind own");
    assert!(moves.find(from, Square(4, 5), None).is_some(), "capture f4");
    assert!(moves.find(from, Square(4, 6), None).is_none(), "behind capture");
}

#[test]
fn test_no_castling_moves_are_generated() {
    // Cleared kingside: a castling engine would offer e1g1 here.
    let mut board = BoardBuilder::starting_position()
        .clear(Square(7, 5))
        .clear(Square(7, 6))
        .build();

    let moves = board.legal_moves(Color::White);
    assert!(moves.find(Square(7, 4), Square(7, 6), None).is_none());
}

#[test]
fn test_perft_startpos_shallow() {
    let mut board = Board::new();
    assert_eq!(board.perft(1), 20);
    assert_eq!(board.perft(2), 400);
}
