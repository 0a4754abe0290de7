//! Fixed-depth alpha-beta search.
//!
//! White maximizes and raises alpha, Black minimizes and lowers beta; a
//! subtree is pruned once `beta <= alpha`. Leaves are scored by the static
//! evaluator. The search is synchronous and runs to completion; the only
//! resource control is the depth.

use log::{debug, info};

use super::{Board, Color, Move};

/// Sentinel beyond any reachable evaluation.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Best move for `color` searching `depth` plies ahead.
///
/// Ties go to the first move encountered in `legal_moves` order, so the
/// result is deterministic. Returns `None` only when `color` has no legal
/// moves: the game is over (checkmate or stalemate) and the caller must
/// not retry.
pub fn best_move(board: &mut Board, color: Color, depth: u32) -> Option<Move> {
    let moves = board.legal_moves(color);
    if moves.is_empty() {
        return None;
    }

    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best: Option<(Move, i32)> = None;

    for m in moves.iter() {
        board.make_move(m);
        let value = alpha_beta(
            board,
            color.opponent(),
            depth.saturating_sub(1),
            alpha,
            beta,
        );
        board.undo_move();
        debug!("root move {m} scores {value}");

        match color {
            Color::White => {
                if best.map_or(true, |(_, best_value)| value > best_value) {
                    best = Some((*m, value));
                }
                alpha = alpha.max(value);
            }
            Color::Black => {
                if best.map_or(true, |(_, best_value)| value < best_value) {
                    best = Some((*m, value));
                }
                beta = beta.min(value);
            }
        }
    }

    let (mv, value) = best?;
    info!("{color} plays {mv} (depth {depth}, score {value})");
    Some(mv)
}

/// Recursive alpha-beta over the legal move tree. A node where the side
/// to move has no legal moves folds to the worst value for that side.
fn alpha_beta(board: &mut Board, side: Color, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
    if depth == 0 {
        return board.evaluate();
    }

    let moves = board.legal_moves(side);

    match side {
        Color::White => {
            let mut best_value = -INFINITY;
            for m in moves.iter() {
                board.make_move(m);
                let value = alpha_beta(board, Color::Black, depth - 1, alpha, beta);
                board.undo_move();
                best_value = best_value.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best_value
        }
        Color::Black => {
            let mut best_value = INFINITY;
            for m in moves.iter() {
                board.make_move(m);
                let value = alpha_beta(board, Color::White, depth - 1, alpha, beta);
                board.undo_move();
                best_value = best_value.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best_value
        }
    }
}
