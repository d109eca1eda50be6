use std::fmt::Debug;

/// The outcome of a game position.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome<P> {
    None,
    Draw,
    Winner(P),
}

impl<P> Outcome<P> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::None)
    }
}

/// Capabilities the search needs from a concrete game.
///
/// The search clones a board right before applying a move,
/// so `apply` is free to mutate in place.
/// Sibling branches never see each other's boards.
pub trait Board: Clone + Send + Sync + 'static {
    type Move: Clone + PartialEq + Debug + Send + Sync + 'static;
    type Player: Copy + PartialEq + Debug + Send + Sync + 'static;

    /// All legal moves in a stable order.
    /// May only be empty if the position is terminal.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays the move for the current player.
    fn apply(&mut self, mv: &Self::Move);

    /// Returns if the game has ended and who won.
    fn outcome(&self) -> Outcome<Self::Player>;

    /// The player to move.
    fn current_player(&self) -> Self::Player;
}
