use std::time::Instant;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::SearchConfig;
use crate::search::{parallel_root_search, root_search, Heuristic, SearchError};
use crate::util::max_indices;

/// Alpha-beta agent that picks uniformly among the best moves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxAgent<H> {
    pub config: SearchConfig,
    pub heuristic: H,
}

impl<H> MinimaxAgent<H> {
    pub fn new(config: SearchConfig, heuristic: H) -> Self {
        Self { config, heuristic }
    }

    pub fn step<B>(&self, board: &B) -> Result<Option<B::Move>, SearchError>
    where
        B: Board,
        H: Heuristic<B>,
    {
        let mut rng = SmallRng::from_entropy();
        self.step_with_rng(board, &mut rng)
    }

    pub fn step_with_rng<B, R>(
        &self,
        board: &B,
        rng: &mut R,
    ) -> Result<Option<B::Move>, SearchError>
    where
        B: Board,
        H: Heuristic<B>,
        R: Rng + ?Sized,
    {
        get_move(board, &self.heuristic, &self.config, rng)
    }
}

/// Selects the next move.
///
/// The config is validated first, so an invalid config is an error even if
/// the position needs no search.
/// Returns `None` if there are no legal moves and the only move without
/// searching. Otherwise all root moves are scored (on the worker pool if the
/// config allows it) and one of the best is chosen at random.
pub fn get_move<B, H, R>(
    board: &B,
    heuristic: &H,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Option<B::Move>, SearchError>
where
    B: Board,
    H: Heuristic<B>,
    R: Rng + ?Sized,
{
    config.validate()?;

    let mut moves = board.legal_moves();
    if moves.len() <= 1 {
        return Ok(moves.pop());
    }

    let start = Instant::now();
    let parallel = config.use_parallel(moves.len());
    let mut results = if parallel {
        parallel_root_search(board, moves, config, heuristic)?
    } else {
        root_search(board, moves, config.depth, heuristic)?
    };

    debug!(
        ">>> scores {:?}",
        results.iter().map(|r| r.score).collect::<Vec<_>>()
    );

    let best = max_indices(results.iter().map(|r| r.score));
    let Some(&choice) = best.choose(rng) else {
        return Ok(None);
    };
    let result = results.swap_remove(choice);

    info!(
        ">>> alphabeta {} {}ms {:?} {} ({} of {} best, parallel={})",
        config.depth,
        start.elapsed().as_millis(),
        result.mv,
        result.score,
        best.len(),
        results.len() + 1,
        parallel
    );

    Ok(Some(result.mv))
}
