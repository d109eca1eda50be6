mod alphabeta;
pub use alphabeta::*;
mod minimax;
pub use minimax::*;
mod parallel;
pub use parallel::*;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt::Debug;

use crate::board::{Board, Outcome};

/// Terminal scores.
///
/// Evaluations of undecided boards have to stay strictly within `(LOSS, WIN)`.
pub const WIN: f64 = 1_000_000.0;
pub const DRAW: f64 = 0.0;
pub const LOSS: f64 = -1_000_000.0;

/// A heuristic that evaluates the board at the leafs of a tree search.
///
/// Has to be a pure function of the board and the perspective,
/// because parallel workers evaluate their own copies.
/// The search only evaluates undecided boards and rejects scores
/// outside of `(LOSS, WIN)`.
pub trait Heuristic<B: Board>: Debug + Clone + Send + Sync + 'static {
    fn eval(&self, board: &B, player: B::Player) -> f64;
}

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("no legal moves in a non terminal position")]
    NoLegalMoves,
    #[error("heuristic returned an invalid score: {0}")]
    InvalidScore(f64),
    #[error("search worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("worker pool could not be created: {0}")]
    Pool(#[from] std::io::Error),
    #[error("invalid search config: {0}")]
    InvalidConfig(String),
}

/// Score of a root move.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub mv: M,
    pub score: f64,
}

/// Score of a decided game, biased to prefer winning sooner and losing later.
fn terminal_score<P: PartialEq>(outcome: Outcome<P>, player: P, depth: usize) -> Option<f64> {
    match outcome {
        Outcome::Winner(p) if p == player => Some(WIN + depth as f64),
        Outcome::Winner(_) => Some(LOSS - depth as f64),
        Outcome::Draw => Some(DRAW),
        Outcome::None => None,
    }
}

fn evaluate<B: Board, H: Heuristic<B>>(
    board: &B,
    player: B::Player,
    heuristic: &H,
) -> Result<f64, SearchError> {
    let score = heuristic.eval(board, player);
    if score.is_nan() || score <= LOSS || score >= WIN {
        return Err(SearchError::InvalidScore(score));
    }
    Ok(score)
}
