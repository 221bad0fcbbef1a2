use log::debug;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::env::Action;
use crate::error::{Error, Result};
use crate::eval::{food_proximity, in_danger};
use crate::game::Spatial;
use crate::search::LOSS;

/// Scores a single action of the maximizing agent without looking further
/// ahead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflexEvaluator {
    /// Value of moving onto food.
    pub food_value: f64,
    /// Value of not moving at all.
    pub stop_value: f64,
    /// Value of moving next to an adversary.
    pub danger_value: f64,
    pub danger_radius: u64,
    /// Number of closest food items that are considered.
    pub nearest: usize,
}

impl Default for ReflexEvaluator {
    fn default() -> Self {
        Self {
            food_value: 2.0,
            stop_value: 0.0,
            danger_value: LOSS,
            danger_radius: 1,
            nearest: 7,
        }
    }
}

impl ReflexEvaluator {
    pub fn eval<S: Spatial>(&self, state: &S, action: Action) -> Result<f64> {
        if action.is_stop() {
            return Ok(self.stop_value);
        }

        let next = state.successor(0, action)?;
        let pos = next.position(0);
        if in_danger(&next, pos, self.danger_radius) {
            return Ok(self.danger_value);
        }
        if state.has_food(pos) {
            return Ok(self.food_value);
        }
        Ok(food_proximity(pos, &state.food(), self.nearest))
    }
}

/// Agent that greedily takes the best scored action.
/// Equally good actions are chosen at random.
#[derive(Debug, Clone)]
pub struct ReflexAgent {
    evaluator: ReflexEvaluator,
    rng: SmallRng,
}

impl ReflexAgent {
    pub fn new(evaluator: ReflexEvaluator) -> ReflexAgent {
        ReflexAgent {
            evaluator,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(evaluator: ReflexEvaluator, seed: u64) -> ReflexAgent {
        ReflexAgent {
            evaluator,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn choose_action<S: Spatial>(&mut self, state: &S) -> Result<Action> {
        let mut scored = Vec::new();
        for action in state.legal_actions(0) {
            scored.push((action, self.evaluator.eval(state, action)?));
        }
        debug!(">>> reflex {:?}", scored);

        let best = scored
            .iter()
            .map(|&(_, v)| v)
            .fold(f64::NEG_INFINITY, f64::max);
        let candidates: Vec<Action> = scored
            .iter()
            .filter(|&&(_, v)| v == best)
            .map(|&(a, _)| a)
            .collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalMove { layer: 0 })
    }
}

impl Default for ReflexAgent {
    fn default() -> Self {
        Self::new(ReflexEvaluator::default())
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::testing::Field;

    #[test]
    fn action_values() {
        let field = Field::parse(
            r#"
            . o . .
            . 0 . 1
            . . . o
            "#,
        );
        let e = ReflexEvaluator::default();
        assert_eq!(e.eval(&field, Action::Stop).unwrap(), 0.0);
        assert_eq!(e.eval(&field, Action::North).unwrap(), e.food_value);
        assert_eq!(e.eval(&field, Action::East).unwrap(), LOSS);
        // (1, 0): food at distance 2 and 2
        assert_eq!(e.eval(&field, Action::South).unwrap(), 2.0 / 4.0);
        assert_eq!(e.eval(&field, Action::West).unwrap(), 2.0 / 6.0);
    }

    #[test]
    fn stop_value() {
        let field = Field::parse(
            r#"
            . . . . 1
            0 . . . o
            "#,
        );
        let e = ReflexEvaluator::default();
        assert_eq!(e.eval(&field, Action::Stop).unwrap(), 0.0);
        assert_eq!(e.eval(&field, Action::North).unwrap(), 1.0 / 5.0);
        assert_eq!(e.eval(&field, Action::East).unwrap(), 1.0 / 3.0);

        let e = ReflexEvaluator {
            stop_value: -1.0,
            ..e
        };
        assert_eq!(e.eval(&field, Action::Stop).unwrap(), -1.0);
    }

    #[test]
    fn random_tie_break() {
        let field = Field::parse(
            r#"
            1 . o . .
            . . . . .
            . . 0 . .
            . . . . .
            . . o . .
            "#,
        );
        let mut agent = ReflexAgent::with_seed(ReflexEvaluator::default(), 3);
        let chosen: HashSet<Action> = (0..64)
            .map(|_| agent.choose_action(&field).unwrap())
            .collect();
        assert_eq!(chosen, HashSet::from([Action::North, Action::South]));
    }

    #[test]
    fn greedy() {
        let field = Field::parse(
            r#"
            . . . .
            0 o . 1
            "#,
        );
        let mut agent = ReflexAgent::with_seed(ReflexEvaluator::default(), 1);
        for _ in 0..10 {
            assert_eq!(agent.choose_action(&field).unwrap(), Action::East);
        }
    }
}
