use super::super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// King steps to the 8 adjacent squares. Castling is deliberately not
    /// generated; the legality filter downstream rejects stepping into
    /// attacked squares.
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        for to in self.piece_targets(from) {
            moves.push(Move::new(from, to, Piece::King));
        }
    }
}
