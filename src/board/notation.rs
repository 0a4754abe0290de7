//! Coordinate-notation move adapter.
//!
//! Maps text like "e2e4" or "e7e8q" onto a legal `Move` for the given
//! side. Rank/file text maps onto squares with row 0 = rank 8 and col 0 =
//! file 'a'. The returned move is guaranteed to be a member of
//! `legal_moves`, so it is safe to feed to `make_move`; malformed or
//! illegal input is rejected and the board is left unchanged.

use std::str::FromStr;

use super::error::MoveParseError;
use super::{Board, Color, Move, Piece, Square};

/// Parse a coordinate-notation move and validate it against the legal
/// moves for `color`.
///
/// A fifth character names the promotion piece ("e7e8q"); promotions must
/// spell it out, every other move must omit it.
pub fn parse_move(board: &mut Board, color: Color, text: &str) -> Result<Move, MoveParseError> {
    let text = text.trim();
    // Coordinate notation is ASCII only; reject anything else before the
    // byte slicing below.
    if !text.is_ascii() {
        return Err(MoveParseError::InvalidSquare {
            notation: text.to_string(),
        });
    }
    if text.len() != 4 && text.len() != 5 {
        return Err(MoveParseError::InvalidLength { len: text.len() });
    }

    let from = Square::from_str(&text[0..2]).map_err(|_| MoveParseError::InvalidSquare {
        notation: text.to_string(),
    })?;
    let to = Square::from_str(&text[2..4]).map_err(|_| MoveParseError::InvalidSquare {
        notation: text.to_string(),
    })?;

    let promotion = match text.chars().nth(4) {
        None => None,
        Some(c) => match Piece::from_char(c) {
            Some(piece @ (Piece::Rook | Piece::Knight | Piece::Bishop | Piece::Queen)) => {
                Some(piece)
            }
            _ => return Err(MoveParseError::InvalidPromotion { char: c }),
        },
    };

    board
        .legal_moves(color)
        .find(from, to, promotion)
        .ok_or_else(|| MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
}
