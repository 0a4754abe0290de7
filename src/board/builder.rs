//! Fluent builder for constructing positions.
//!
//! Allows injecting a custom layout piece by piece rather than starting
//! from the standard game.
//!
//! # Example
//! ```
//! use minimax_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, &piece) in back_rank.iter().enumerate() {
            builder.pieces.push((Square(0, col), Color::Black, piece));
            builder.pieces.push((Square(7, col), Color::White, piece));
        }
        for col in 0..8 {
            builder
                .pieces
                .push((Square(1, col), Color::Black, Piece::Pawn));
            builder
                .pieces
                .push((Square(6, col), Color::White, Piece::Pawn));
        }

        builder
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        board.side_to_move = self.side_to_move;

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_matches_new() {
        let built = BoardBuilder::starting_position().build();
        let standard = Board::new();
        assert_eq!(built.grid(), standard.grid());
        assert_eq!(built.side_to_move(), standard.side_to_move());
    }

    #[test]
    fn test_new_board_layout() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(Square(7, 4)),
            Some((Color::White, Piece::King)) // e1
        );
        assert_eq!(
            board.piece_at(Square(0, 4)),
            Some((Color::Black, Piece::King)) // e8
        );
        assert_eq!(
            board.piece_at(Square(7, 0)),
            Some((Color::White, Piece::Rook)) // a1
        );
        assert_eq!(
            board.piece_at(Square(6, 3)),
            Some((Color::White, Piece::Pawn)) // d2
        );
        assert_eq!(
            board.piece_at(Square(1, 5)),
            Some((Color::Black, Piece::Pawn)) // f7
        );
        assert!(board.piece_at(Square(4, 4)).is_none());
    }

    #[test]
    fn test_kings_only() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .build();

        assert_eq!(
            board.piece_at(Square(7, 4)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            board.piece_at(Square(0, 4)),
            Some((Color::Black, Piece::King))
        );
        assert!(board.piece_at(Square(4, 4)).is_none());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Rook)
            .piece(Square(3, 3), Color::Black, Piece::Queen)
            .build();

        assert_eq!(
            board.piece_at(Square(3, 3)),
            Some((Color::Black, Piece::Queen))
        );
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(0, 0)) // remove black rook on a8
            .build();

        assert!(board.piece_at(Square(0, 0)).is_none());
        assert!(board.piece_at(Square(0, 1)).is_some());
    }

    #[test]
    fn test_side_to_move() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .build();

        assert_eq!(board.side_to_move(), Color::Black);
    }
}
