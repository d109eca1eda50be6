//! Example game implementing [`crate::board::Board`].

mod heuristic;
pub use heuristic::*;
mod ultimate;
pub use ultimate::*;
