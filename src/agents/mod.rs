use std::fmt;
use std::str::FromStr;

mod minimax;
pub use minimax::*;
mod random;
pub use random::*;

use rand::Rng;

use crate::games::{UltimateBoard, UltimateHeuristic, UltimateMove};
use crate::search::SearchError;

/// Agents that play ultimate tic-tac-toe.
///
/// Configured with JSON, e.g. `{"Minimax":{"config":{"depth":4}}}`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Minimax(MinimaxAgent<UltimateHeuristic>),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::Minimax(MinimaxAgent::default())
    }
}

impl Agent {
    pub fn step<R: Rng + ?Sized>(
        &self,
        board: &UltimateBoard,
        rng: &mut R,
    ) -> Result<Option<UltimateMove>, SearchError> {
        match self {
            Agent::Minimax(agent) => agent.step_with_rng(board, rng),
            Agent::Random(agent) => Ok(agent.step(board, rng)),
        }
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
