//! Castling status flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Whether each side has castled.
///
/// The engine never generates castling moves, so these flags are carried in
/// the board state and reported by snapshots but never flipped by move
/// application. Kept because the UI contract exposes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingStatus {
    pub white_castled: bool,
    pub black_castled: bool,
}

impl CastlingStatus {
    /// Fresh-game status: neither side has castled.
    #[must_use]
    pub const fn none() -> Self {
        CastlingStatus {
            white_castled: false,
            black_castled: false,
        }
    }

    /// Whether the given side has castled.
    #[inline]
    #[must_use]
    pub const fn has_castled(self, color: Color) -> bool {
        match color {
            Color::White => self.white_castled,
            Color::Black => self.black_castled,
        }
    }
}
