use std::sync::Arc;

use log::debug;

use super::{alphabeta, Heuristic, SearchError, SearchResult};
use crate::board::Board;
use crate::config::SearchConfig;

/// Scores every root move on its own worker.
///
/// Each task applies one root move to its own copy of the shared root board
/// and searches the remaining `depth - 1` plies with the full window.
/// Tasks do not share bounds, so every returned score is exact.
///
/// The pool only lives for this decision and has `config.pool_size` threads.
/// Results are paired with their move by submission order.
///
/// # Panics
/// If called from within an asynchronous tokio context.
pub fn parallel_root_search<B: Board, H: Heuristic<B>>(
    board: &B,
    moves: Vec<B::Move>,
    config: &SearchConfig,
    heuristic: &H,
) -> Result<Vec<SearchResult<B::Move>>, SearchError> {
    assert!(config.depth > 0);

    let workers = config.pool_size(moves.len());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .max_blocking_threads(workers)
        .thread_name("search-worker")
        .build()?;
    debug!("search pool: {} workers, {} tasks", workers, moves.len());

    let root = Arc::new(board.clone());
    let player = board.current_player();
    let depth = config.depth - 1;

    let tasks = moves
        .iter()
        .cloned()
        .map(|mv| {
            let root = root.clone();
            let heuristic = heuristic.clone();
            runtime.spawn_blocking(move || {
                let mut board = B::clone(&root);
                board.apply(&mv);
                alphabeta(
                    &board,
                    depth,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    false,
                    player,
                    &heuristic,
                )
            })
        })
        .collect::<Vec<_>>();

    let scores = runtime.block_on(async move {
        let mut scores = Vec::with_capacity(tasks.len());
        for task in tasks {
            scores.push(task.await??);
        }
        Ok::<_, SearchError>(scores)
    })?;

    Ok(moves
        .into_iter()
        .zip(scores)
        .map(|(mv, score)| SearchResult { mv, score })
        .collect())
}
