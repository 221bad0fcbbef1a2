mod minimax;
pub use minimax::*;
mod alphabeta;
pub use alphabeta::*;
mod expectimax;
pub use expectimax::*;

use std::fmt::Debug;

use log::debug;

use crate::env::Action;
use crate::error::{Error, Result};
use crate::game::GameState;

pub const WIN: f64 = 10000.0;
pub const LOSS: f64 = -10000.0;

/// A heuristic that evaluates non-terminal states at the depth frontier.
///
/// Evaluations have to be deterministic and free of side effects.
pub trait Evaluator<S: GameState> {
    fn eval(&self, state: &S) -> f64;
}

impl<S: GameState, F: Fn(&S) -> f64> Evaluator<S> for F {
    fn eval(&self, state: &S) -> f64 {
        self(state)
    }
}

/// The bounds passed down to a child node.
///
/// `alpha` is the value the maximizer is already guaranteed on the current
/// path, `beta` the value the adversaries are guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Window {
    pub const FULL: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

/// Whether the remaining siblings of a node have to be explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Cutoff,
}

/// Running accumulator of an interior node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backup {
    /// Best child value for the agent to move.
    pub value: f64,
    /// Sum over all child values.
    pub total: f64,
    pub count: usize,
}

impl Backup {
    fn maximizer() -> Backup {
        Backup {
            value: f64::NEG_INFINITY,
            total: 0.0,
            count: 0,
        }
    }

    fn adversary() -> Backup {
        Backup {
            value: f64::INFINITY,
            total: 0.0,
            count: 0,
        }
    }

    /// Adds a child to the sum only, `value` is left unchanged.
    pub fn push(&mut self, child: f64) {
        self.total += child;
        self.count += 1;
    }

    pub fn push_max(&mut self, child: f64) {
        self.value = self.value.max(child);
        self.push(child);
    }

    pub fn push_min(&mut self, child: f64) {
        self.value = self.value.min(child);
        self.push(child);
    }

    pub fn mean(&self) -> f64 {
        self.total / self.count as f64
    }
}

/// The combination rules that distinguish the search variants.
///
/// The traversal, terminal checks and depth limit are shared, strategies
/// only decide how child values are backed up and when siblings are skipped.
pub trait Strategy: Debug {
    const NAME: &'static str;

    fn combine_maximizer(&self, node: &mut Backup, child: f64, _window: &mut Window) -> Flow {
        node.push_max(child);
        Flow::Continue
    }

    fn combine_adversary(&self, node: &mut Backup, child: f64, window: &mut Window) -> Flow;

    fn adversary_value(&self, node: &Backup) -> f64 {
        node.value
    }
}

/// Counters of a single search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Visited nodes including the root.
    pub nodes: usize,
    /// Calls of the evaluator at the depth frontier.
    pub evaluations: usize,
    /// Nodes scored as win or loss.
    pub terminals: usize,
    /// Nodes whose remaining siblings were pruned.
    pub cutoffs: usize,
    /// Deepest layer that was visited.
    pub max_layer: usize,
}

/// Result of a search from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub action: Action,
    pub value: f64,
    /// Backed up values of all candidate root actions in legal-action order.
    pub values: Vec<(Action, f64)>,
    pub stats: Stats,
}

/// Searches `depth` full rounds from `state` and returns the best action of
/// the maximizing agent.
///
/// Every root action is searched with the full window so the reported
/// values are exact. Ties go to the first action.
pub fn search_root<S, E, T>(
    strategy: &T,
    state: &S,
    depth: usize,
    evaluator: &E,
) -> Result<SearchResult>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: Strategy,
{
    let mut stats = Stats {
        nodes: 1,
        ..Stats::default()
    };

    let mut values = Vec::new();
    let mut best: Option<(Action, f64)> = None;
    for action in state.legal_actions(0) {
        if action.is_stop() {
            continue;
        }
        let child = state.successor(0, action)?;
        let value = backed_up(strategy, &child, 1, depth, Window::FULL, evaluator, &mut stats)?;
        values.push((action, value));
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((action, value));
        }
    }

    let (action, value) = best.ok_or(Error::NoLegalMove { layer: 0 })?;
    debug!("{} depth {}: {:?} {:?}", T::NAME, depth, values, stats);
    Ok(SearchResult {
        action,
        value,
        values,
        stats,
    })
}

/// Backed up value of `state` at `layer` in a search of `depth` rounds.
pub fn backed_up<S, E, T>(
    strategy: &T,
    state: &S,
    layer: usize,
    depth: usize,
    window: Window,
    evaluator: &E,
    stats: &mut Stats,
) -> Result<f64>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: Strategy,
{
    stats.nodes += 1;
    stats.max_layer = stats.max_layer.max(layer);

    if state.is_win() {
        stats.terminals += 1;
        return Ok(WIN);
    }
    if state.is_lose() {
        stats.terminals += 1;
        return Ok(LOSS);
    }

    let agents = state.num_agents();
    if layer >= depth.saturating_mul(agents) {
        stats.evaluations += 1;
        return Ok(evaluator.eval(state));
    }

    let agent = layer % agents;
    let mut window = window;
    if agent == 0 {
        let mut node = Backup::maximizer();
        for action in state.legal_actions(0) {
            if action.is_stop() {
                continue;
            }
            let child = state.successor(0, action)?;
            let value = backed_up(strategy, &child, layer + 1, depth, window, evaluator, stats)?;
            if strategy.combine_maximizer(&mut node, value, &mut window) == Flow::Cutoff {
                stats.cutoffs += 1;
                break;
            }
        }
        if node.count == 0 {
            return Err(Error::NoLegalMove { layer });
        }
        Ok(node.value)
    } else {
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            // continue with next agent
            return backed_up(strategy, state, layer + 1, depth, window, evaluator, stats);
        }

        let mut node = Backup::adversary();
        for action in actions {
            let child = state.successor(agent, action)?;
            let value = backed_up(strategy, &child, layer + 1, depth, window, evaluator, stats)?;
            if strategy.combine_adversary(&mut node, value, &mut window) == Flow::Cutoff {
                stats.cutoffs += 1;
                break;
            }
        }
        Ok(strategy.adversary_value(&node))
    }
}
