use crate::env::{Action, Vec2D};
use crate::error::Result;

/// The game model the search is run on.
///
/// Agent 0 is the maximizing agent, all other agents are its adversaries.
/// Implementations are never mutated by the search, every move produces a
/// fresh successor.
pub trait GameState: Sized {
    /// Number of agents, including the maximizing agent.
    fn num_agents(&self) -> usize;

    /// Legal actions of `agent` in this state. May contain [`Action::Stop`].
    fn legal_actions(&self, agent: usize) -> Vec<Action>;

    /// Returns the state after `agent` played `action`.
    ///
    /// Fails with [`crate::Error::InvalidAction`] if the action is not legal.
    fn successor(&self, agent: usize, action: Action) -> Result<Self>;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Intrinsic score of the state.
    fn score(&self) -> f64;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Positional view on a grid game, used by evaluators that reason about
/// distances.
pub trait Spatial: GameState {
    fn position(&self, agent: usize) -> Vec2D;

    /// Positions of the remaining objectives.
    fn food(&self) -> Vec<Vec2D>;

    fn has_food(&self, p: Vec2D) -> bool {
        self.food().contains(&p)
    }
}
