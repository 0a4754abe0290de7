pub mod agent;
pub mod board;

pub use agent::RandomAgent;
pub use board::{Board, BoardBuilder, Color, Move, Piece, Square};
