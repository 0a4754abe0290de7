use super::super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Bishop, rook, and queen moves: each ray in the piece's target set
    /// already stops before own pieces and after the first capture.
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        for to in self.piece_targets(from) {
            moves.push(Move::new(from, to, piece));
        }
    }
}
