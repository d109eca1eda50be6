use super::{evaluate, terminal_score, Heuristic, SearchError, SearchResult};
use crate::board::Board;

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - Scores are from the view of `player`
/// - `maximizing` alternates with every ply
/// - Decided games are scored with `WIN`/`LOSS` biased by the remaining depth
pub fn alphabeta<B: Board, H: Heuristic<B>>(
    board: &B,
    depth: usize,
    mut alpha: f64,
    mut beta: f64,
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

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for mv in &moves {
            let mut child = board.clone();
            child.apply(mv);
            let newval = alphabeta(&child, depth - 1, alpha, beta, false, player, heuristic)?;
            if newval > value {
                value = newval;
            }
            if value > alpha {
                alpha = value;
            }
            // beta cutoff
            if beta <= alpha {
                break;
            }
        }
        Ok(value)
    } else {
        let mut value = f64::INFINITY;
        for mv in &moves {
            let mut child = board.clone();
            child.apply(mv);
            let newval = alphabeta(&child, depth - 1, alpha, beta, true, player, heuristic)?;
            if newval < value {
                value = newval;
            }
            if value < beta {
                beta = value;
            }
            // alpha cutoff
            if beta <= alpha {
                break;
            }
        }
        Ok(value)
    }
}

/// Scores all root moves sequentially, sharing alpha between them.
///
/// The best scores are exact. Worse moves may only carry an upper bound.
/// A move whose bound ties the best score is searched again with the full
/// window, so the set of best moves is exact as well.
pub fn root_search<B: Board, H: Heuristic<B>>(
    board: &B,
    moves: Vec<B::Move>,
    depth: usize,
    heuristic: &H,
) -> Result<Vec<SearchResult<B::Move>>, SearchError> {
    assert!(depth > 0);
    let player = board.current_player();

    let mut best = f64::NEG_INFINITY;
    let mut results = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut child = board.clone();
        child.apply(&mv);
        let mut score = alphabeta(
            &child,
            depth - 1,
            best,
            f64::INFINITY,
            false,
            player,
            heuristic,
        )?;
        if score == best {
            score = alphabeta(
                &child,
                depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                player,
                heuristic,
            )?;
        }
        if score > best {
            best = score;
        }
        results.push(SearchResult { mv, score });
    }
    Ok(results)
}
