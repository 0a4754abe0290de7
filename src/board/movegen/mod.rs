//! Legal move generation.
//!
//! Pseudo-legal moves come from a row-major board scan with per-piece
//! dispatch; the legality filter then applies each candidate, asks whether
//! the mover's own king is attacked, and undoes it. That single rule
//! rejects moving into check, leaving the king in check, and moving a
//! pinned piece.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, MoveList, Piece, Square};

impl Board {
    fn generate_pseudo_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                let Some((piece_color, piece)) = self.piece_at(from) else {
                    continue;
                };
                if piece_color != color {
                    continue;
                }
                match piece {
                    Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                    Piece::Knight => self.generate_knight_moves(from, &mut moves),
                    Piece::Bishop | Piece::Rook | Piece::Queen => {
                        self.generate_slider_moves(from, piece, &mut moves);
                    }
                    Piece::King => self.generate_king_moves(from, &mut moves),
                }
            }
        }

        moves
    }

    /// All legal moves for `color`, in deterministic row-major order. An
    /// empty list signals checkmate or stalemate; disambiguate with
    /// `is_in_check`.
    #[must_use]
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let pseudo_moves = self.generate_pseudo_moves(color);
        let mut legal_moves = MoveList::new();

        for m in pseudo_moves.iter() {
            self.make_move(m);
            if !self.is_in_check(color) {
                legal_moves.push(*m);
            }
            self.undo_move();
        }

        legal_moves
    }

    /// Checkmate: in check with no legal move.
    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Stalemate: not in check, but no legal move either.
    #[must_use]
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// The game is over once the side to move has no legal moves.
    #[must_use]
    pub fn is_game_over(&mut self) -> bool {
        let color = self.side_to_move;
        self.legal_moves(color).is_empty()
    }

    /// Winner of a finished game: the opponent of a checkmated side.
    /// `None` while the game is running or when it ended in stalemate.
    #[must_use]
    pub fn winner(&mut self) -> Option<Color> {
        let color = self.side_to_move;
        if self.is_checkmate(color) {
            Some(color.opponent())
        } else {
            None
        }
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let color = self.side_to_move;
        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
