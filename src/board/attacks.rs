//! Attack computation and check detection.
//!
//! Two related questions live here and share their movement constants:
//!
//! - `piece_targets`/`attack_sets`: which squares can a side move a piece
//!   onto (empty-square reach or capture)? Pawn forward advances count,
//!   because move generation consumes these sets.
//! - `is_square_attacked`/`is_in_check`: is a square under attack? Pawn
//!   forward advances do NOT count here; only the diagonal capture squares
//!   check a king.

use super::{Board, Color, Piece, Square, SquareSet};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Squares the piece on `from` can move onto: empty-square reach or
    /// enemy capture, per piece movement rule. Empty set if `from` holds
    /// no piece.
    #[must_use]
    pub(crate) fn piece_targets(&self, from: Square) -> SquareSet {
        let Some((color, piece)) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };

        match piece {
            Piece::Pawn => self.pawn_targets(from, color),
            Piece::Knight => self.leaper_targets(from, color, &KNIGHT_OFFSETS),
            Piece::King => self.leaper_targets(from, color, &KING_OFFSETS),
            Piece::Bishop => self.slider_targets(from, color, &DIAGONAL_DIRS),
            Piece::Rook => self.slider_targets(from, color, &ORTHOGONAL_DIRS),
            Piece::Queen => self
                .slider_targets(from, color, &ORTHOGONAL_DIRS)
                .union(self.slider_targets(from, color, &DIAGONAL_DIRS)),
        }
    }

    fn pawn_targets(&self, from: Square, color: Color) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let dir = color.pawn_direction();

        // Forward advances require empty squares; the double step only
        // from the starting row with both intervening squares empty.
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                targets.insert(one);
                if from.0 == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            targets.insert(two);
                        }
                    }
                }
            }
        }

        // Diagonal-forward squares only when occupied by an enemy piece.
        for dc in [-1, 1] {
            if let Some(diag) = from.offset(dir, dc) {
                if let Some((target_color, _)) = self.piece_at(diag) {
                    if target_color != color {
                        targets.insert(diag);
                    }
                }
            }
        }

        targets
    }

    fn leaper_targets(&self, from: Square, color: Color, offsets: &[(isize, isize)]) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                match self.piece_at(to) {
                    Some((target_color, _)) if target_color == color => {}
                    _ => targets.insert(to),
                }
            }
        }
        targets
    }

    fn slider_targets(&self, from: Square, color: Color, dirs: &[(isize, isize)]) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(dr, dc) in dirs {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, dc) {
                match self.piece_at(next) {
                    None => {
                        targets.insert(next);
                        sq = next;
                    }
                    Some((target_color, _)) => {
                        // Ray stops after a capture, before an own piece.
                        if target_color != color {
                            targets.insert(next);
                        }
                        break;
                    }
                }
            }
        }
        targets
    }

    /// Attack set for one side: union of `piece_targets` over that side's
    /// pieces, row-major scan. May be empty for a side with no pieces.
    #[must_use]
    pub fn attack_set(&self, color: Color) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if let Some((piece_color, _)) = self.piece_at(sq) {
                    if piece_color == color {
                        set = set.union(self.piece_targets(sq));
                    }
                }
            }
        }
        set
    }

    /// Attack sets for both sides as (black, white).
    #[must_use]
    pub fn attack_sets(&self) -> (SquareSet, SquareSet) {
        (self.attack_set(Color::Black), self.attack_set(Color::White))
    }

    /// Returns true if `attacker_color` attacks `square`, by scanning
    /// knight offsets and sliding rays outward from the square. Pawns
    /// count only via their diagonal capture squares.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        // A pawn on its capture-origin square attacks us: step backwards
        // along the attacker's pawn direction.
        let dir = attacker_color.pawn_direction();
        for dc in [-1, 1] {
            if let Some(from) = square.offset(-dir, dc) {
                if self.piece_at(from) == Some((attacker_color, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(from) = square.offset(dr, dc) {
                if self.piece_at(from) == Some((attacker_color, Piece::Knight)) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &ORTHOGONAL_DIRS {
            if self.ray_attacked(square, dr, dc, attacker_color, Piece::slides_straight) {
                return true;
            }
        }
        for &(dr, dc) in &DIAGONAL_DIRS {
            if self.ray_attacked(square, dr, dc, attacker_color, Piece::slides_diagonally) {
                return true;
            }
        }

        false
    }

    /// Walk one ray outward: the first occupied square decides. A matching
    /// slider checks at any distance, an enemy king at distance 1 only.
    fn ray_attacked(
        &self,
        square: Square,
        dr: isize,
        dc: isize,
        attacker_color: Color,
        slides: fn(Piece) -> bool,
    ) -> bool {
        let mut sq = square;
        let mut distance = 0;
        while let Some(next) = sq.offset(dr, dc) {
            distance += 1;
            match self.piece_at(next) {
                None => sq = next,
                Some((color, piece)) => {
                    return color == attacker_color
                        && (slides(piece) || (piece == Piece::King && distance == 1));
                }
            }
        }
        false
    }

    /// Locate `color`'s king by board scan.
    #[must_use]
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Returns true if `color`'s king is currently attacked. A position
    /// with no king for `color` is reported as not in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
