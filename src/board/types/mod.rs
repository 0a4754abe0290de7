//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, col) board square, row 0 = Black's back rank
//! - `SquareSet` - 64-bit set of squares (attack sets)
//! - `Move` and `MoveList` - move representation
//! - `CastlingStatus` - inert has-castled flags

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

// Re-export all public types
pub use castling::CastlingStatus;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
