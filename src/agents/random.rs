use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;

/// Plays a uniformly random legal move.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn step<B: Board, R: Rng + ?Sized>(&self, board: &B, rng: &mut R) -> Option<B::Move> {
        board.legal_moves().choose(rng).cloned()
    }
}
