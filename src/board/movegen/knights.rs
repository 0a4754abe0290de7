use super::super::{Board, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for to in self.piece_targets(from) {
            moves.push(Move::new(from, to, Piece::Knight));
        }
    }
}
