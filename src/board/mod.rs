//! Chess board representation and game logic.
//!
//! An 8×8 mailbox board with legal-move generation, check/checkmate/
//! stalemate detection, and a fixed-depth alpha-beta search over a static
//! material + piece-square evaluation. Castling, en passant, and draw
//! bookkeeping are out of scope.
//!
//! # Example
//! ```
//! use minimax_chess::board::{search, Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let reply = search::best_move(&mut board, Color::White, 2);
//! assert!(reply.is_some());
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod make_undo;
mod movegen;
pub mod notation;
mod pst;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveParseError, SquareError};
pub use state::{Board, Grid};
pub use types::{
    CastlingStatus, Color, Move, MoveList, MoveListIntoIter, Piece, Square, SquareSet,
    SquareSetIter,
};

pub(crate) use types::PROMOTION_PIECES;
