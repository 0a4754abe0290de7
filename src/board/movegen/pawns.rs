use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Pawn moves from `from`: single/double advances onto empty squares
    /// and diagonal captures, via the pawn's target set. A move onto the
    /// farthest rank expands into exactly four promotion candidates
    /// (rook, knight, bishop, queen) replacing the plain move.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let promotion_row = color.pawn_promotion_row();

        for to in self.piece_targets(from) {
            if to.0 == promotion_row {
                for promoted in PROMOTION_PIECES {
                    moves.push(Move::promotion(from, to, promoted));
                }
            } else {
                moves.push(Move::new(from, to, Piece::Pawn));
            }
        }
    }
}
