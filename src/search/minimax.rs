use super::{evaluate, terminal_score, Heuristic, SearchError};
use crate::board::Board;

/// Plain minimax without pruning.
///
/// Visits every node up to `depth`, which makes it the reference the pruned
/// search is compared against.
pub fn minimax<B: Board, H: Heuristic<B>>(
    board: &B,
    depth: usize,
    maximizing: bool,
    player: B::Player,
    heuristic: &H,
) -> Result<f64, SearchError> {
    if let Some(score) = terminal_score(board.outcome(), player, depth) {
        return Ok(score);
    }
    if depth == 0 {
        return evaluate(board, player, heuristic);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for mv in &moves {
        let mut child = board.clone();
        child.apply(mv);
        let newval = minimax(&child, depth - 1, !maximizing, player, heuristic)?;
        if maximizing && newval > value || !maximizing && newval < value {
            value = newval;
        }
    }
    Ok(value)
}
