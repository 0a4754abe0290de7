//! Move application and reversal.
//!
//! `make_move` performs no legality check: callers must validate against
//! `legal_moves` first. Misuse silently corrupts state. Each application
//! pushes a compact undo record onto the board's history stack instead of
//! snapshotting the whole grid, so undo is constant time.
//!
//! The mover's color is read from the origin square, not from the turn
//! flag: the legality filter also simulates moves for the side not on
//! move, and undo must restore exactly what was there.

use super::{Board, Color, Move, Piece};

/// Everything needed to revert one made move.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UndoRecord {
    pub(crate) mv: Move,
    /// Color of the piece that moved.
    pub(crate) mover: Color,
    /// Side to move before the move was applied.
    pub(crate) prev_side: Color,
    pub(crate) captured: Option<(Color, Piece)>,
}

impl Board {
    /// Apply a move: clear the origin, place the moved piece (or the
    /// promoted piece for promotions) on the destination, hand the turn to
    /// the mover's opponent, and push an undo record.
    pub fn make_move(&mut self, mv: &Move) {
        let mover = self
            .piece_at(mv.from)
            .map_or(self.side_to_move, |(color, _)| color);
        let captured = self.piece_at(mv.to);

        self.clear_square(mv.from);
        let placed = mv.promotion.unwrap_or(mv.piece);
        self.set_piece(mv.to, mover, placed);

        self.history.push(UndoRecord {
            mv: *mv,
            mover,
            prev_side: self.side_to_move,
            captured,
        });
        self.side_to_move = mover.opponent();
    }

    /// Revert the most recent made move, restoring the mover's piece, any
    /// captured piece, and the prior side to move. A defined no-op when
    /// the history stack is empty.
    pub fn undo_move(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };

        self.side_to_move = record.prev_side;
        let mv = record.mv;

        // A promoted piece turns back into the pawn that moved.
        self.set_piece(mv.from, record.mover, mv.piece);
        match record.captured {
            Some((color, piece)) => self.set_piece(mv.to, color, piece),
            None => self.clear_square(mv.to),
        }
    }
}
