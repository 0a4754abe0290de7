//! Random-move agent.
//!
//! Chooses uniformly among the legal moves, mostly useful as a sparring
//! partner and as a move-sequence driver in tests.

use rand::prelude::*;

use crate::board::{Board, Color, Move};

/// An agent that plays a uniformly random legal move.
pub struct RandomAgent {
    color: Color,
    rng: StdRng,
}

impl RandomAgent {
    /// Agent for `color` seeded from system entropy.
    #[must_use]
    pub fn new(color: Color) -> Self {
        RandomAgent {
            color,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic agent for reproducible games.
    #[must_use]
    pub fn with_seed(color: Color, seed: u64) -> Self {
        RandomAgent {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The color this agent plays.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Pick a random legal move, or `None` when the game is over for
    /// this side.
    pub fn pick_move(&mut self, board: &mut Board) -> Option<Move> {
        let moves = board.legal_moves(self.color);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..moves.len());
        moves.get(idx)
    }
}
