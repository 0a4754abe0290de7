//! Piece-square tables.
//!
//! Values are on the engine's ×10 integer scale, indexed `[row][col]` with
//! row 0 = Black's back rank. The White tables are authored; Black's are
//! derived at startup by reversing the rows (vertical mirror).

use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

type Table = [[i32; 8]; 8];

// Pawns gain toward promotion, prefer the center, and dislike blocking
// the e/d home squares.
const WHITE_PAWN: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

// Knights reach more squares from the center, fewer from the rim.
const WHITE_KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

// Bishops want the long diagonals, not the corners.
const WHITE_BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

// Rooks like the seventh rank and the central home files.
const WHITE_ROOK: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const WHITE_QUEEN: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

// The king hides behind its pawns and penalizes wandering forward.
const WHITE_KING: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

const WHITE_TABLES: [Table; 6] = [
    WHITE_PAWN,
    WHITE_KNIGHT,
    WHITE_BISHOP,
    WHITE_ROOK,
    WHITE_QUEEN,
    WHITE_KING,
];

/// `[color][piece][row][col]`, White = 0, Black = 1.
static PST: Lazy<[[Table; 6]; 2]> = Lazy::new(|| {
    let mut black_tables = [[[0; 8]; 8]; 6];
    for (piece, table) in WHITE_TABLES.iter().enumerate() {
        for (row, values) in table.iter().enumerate() {
            black_tables[piece][7 - row] = *values;
        }
    }
    [WHITE_TABLES, black_tables]
});

/// Positional value of `piece` of `color` standing on `sq`.
#[inline]
pub(crate) fn positional(color: Color, piece: Piece, sq: Square) -> i32 {
    let c_idx = match color {
        Color::White => 0,
        Color::Black => 1,
    };
    PST[c_idx][piece.index()][sq.0][sq.1]
}
