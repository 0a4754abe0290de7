//! Static evaluation: material plus piece-square tables.
//!
//! No mobility, pawn-structure, or king-safety terms beyond the static
//! tables. Positive scores favor White.

use super::{pst, Board, Square};

impl Board {
    /// Score the position: Σ over occupied squares of material value plus
    /// the positional table entry, signed by color.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if let Some((color, piece)) = self.piece_at(sq) {
                    score += color.sign() * (piece.value() + pst::positional(color, piece, sq));
                }
            }
        }
        score
    }
}
