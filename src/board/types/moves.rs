//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A single move: origin, destination, the kind of piece moved, and an
/// optional promotion target.
///
/// A move with `promotion: Some(_)` is a pawn reaching the farthest rank;
/// every other move is a plain relocation or capture. Castling and en
/// passant moves are never produced by this engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Kind of the piece being moved (a promoting move still says `Pawn`).
    pub piece: Piece,
    /// Piece the pawn becomes, when this is a promotion.
    pub promotion: Option<Piece>,
}

impl Move {
    /// Create a plain (non-promoting) move
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            promotion: None,
        }
    }

    /// Create a pawn promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, promoted: Piece) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            promotion: Some(promoted),
        }
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Textual description for display and logging collaborators, e.g.
    /// `"white pawn e7e8 promotes to queen"`.
    #[must_use]
    pub fn describe(self, color: Color) -> String {
        let color = match color {
            Color::White => "white",
            Color::Black => "black",
        };
        match self.promotion {
            Some(promoted) => format!(
                "{color} {} {}{} promotes to {promoted}",
                self.piece, self.from, self.to
            ),
            None => format!("{color} {} {}{}", self.piece, self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promoted) = self.promotion {
            write!(f, "{}", promoted.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::new(Square(0, 0), Square(0, 0), Piece::Pawn);

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Find a move by origin, destination, and promotion piece.
    #[must_use]
    pub fn find(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        self.iter()
            .copied()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
    }

    /// Returns true if the list contains `mv`.
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
