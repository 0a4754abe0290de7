use super::make_undo::UndoRecord;
use super::{CastlingStatus, Color, Piece, Square};

/// The 8×8 grid: each square holds at most one colored piece.
pub type Grid = [[Option<(Color, Piece)>; 8]; 8];

/// Board state: piece grid, side to move, and the undo history stack.
///
/// The grid is mutated only through `make_move`/`undo_move`; move
/// generation and search apply moves temporarily and always restore the
/// board before returning. The board is not reentrant: only one in-flight
/// search or move application may touch it at a time.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingStatus,
    pub(crate) history: Vec<UndoRecord>,
}

impl Board {
    /// Standard initial layout, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
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
        for color in Color::BOTH {
            for (col, &piece) in back_rank.iter().enumerate() {
                board.set_piece(Square(color.back_row(), col), color, piece);
                board.set_piece(Square(color.pawn_start_row(), col), color, Piece::Pawn);
            }
        }
        board
    }

    /// Empty board, White to move. Positions are normally populated
    /// through `BoardBuilder`.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingStatus::none(),
            history: Vec::new(),
        }
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Piece (color, kind) on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Returns true if the square holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Deep copy of the grid, for rendering/UI collaborators.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.squares
    }

    /// Has-castled flags. Never updated by move application: castling
    /// moves are not generated.
    #[inline]
    #[must_use]
    pub fn castling_status(&self) -> CastlingStatus {
        self.castling
    }

    /// Number of made, not-yet-undone moves.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
