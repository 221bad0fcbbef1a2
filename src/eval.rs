use serde::{Deserialize, Serialize};

use crate::env::Vec2D;
use crate::game::{GameState, Spatial};
use crate::search::Evaluator;

/// Evaluates a state by its intrinsic score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    fn eval(&self, state: &S) -> f64 {
        state.score()
    }
}

/// Reciprocal of the mean distance to the `nearest` closest objectives.
///
/// Distances are clamped to at least 1. Returns 0 if there is no food left.
pub fn food_proximity(from: Vec2D, food: &[Vec2D], nearest: usize) -> f64 {
    let mut distances: Vec<u64> = food.iter().map(|&f| from.distance(f).max(1)).collect();
    distances.sort_unstable();
    distances.truncate(nearest);
    if distances.is_empty() {
        return 0.0;
    }
    distances.len() as f64 / distances.iter().sum::<u64>() as f64
}

/// Returns if an adversary is within `radius` of the maximizing agent.
pub fn in_danger<S: Spatial>(state: &S, from: Vec2D, radius: u64) -> bool {
    (1..state.num_agents()).any(|agent| state.position(agent).distance(from) <= radius)
}

/// Score combined with the distance to food and adversaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityEvaluator {
    pub score_weight: f64,
    pub food_weight: f64,
    /// Number of closest food items that are considered.
    pub nearest: usize,
    pub danger_radius: u64,
    /// Added if an adversary is within the danger radius.
    pub danger_penalty: f64,
}

impl Default for ProximityEvaluator {
    fn default() -> Self {
        Self {
            score_weight: 1.0,
            food_weight: 10.0,
            nearest: 7,
            danger_radius: 1,
            danger_penalty: -1000.0,
        }
    }
}

impl<S: Spatial> Evaluator<S> for ProximityEvaluator {
    fn eval(&self, state: &S) -> f64 {
        let pos = state.position(0);
        let mut value = self.score_weight * state.score()
            + self.food_weight * food_proximity(pos, &state.food(), self.nearest);
        if in_danger(state, pos, self.danger_radius) {
            value += self.danger_penalty;
        }
        value
    }
}

/// Evaluator selection of an agent configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorConfig {
    #[default]
    Score,
    Proximity(ProximityEvaluator),
}

impl<S: Spatial> Evaluator<S> for EvaluatorConfig {
    fn eval(&self, state: &S) -> f64 {
        match self {
            EvaluatorConfig::Score => ScoreEvaluator.eval(state),
            EvaluatorConfig::Proximity(e) => e.eval(state),
        }
    }
}
