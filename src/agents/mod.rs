use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

mod reflex;
pub use reflex::*;

use crate::env::Action;
use crate::error::{Error, Result};
use crate::eval::EvaluatorConfig;
use crate::game::GameState;
use crate::search::{self, AlphaBeta, Evaluator, Expectimax, Minimax, SearchResult, Strategy};

pub const DEFAULT_DEPTH: usize = 2;

/// The tree search an agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Minimax => Minimax::NAME,
            StrategyKind::AlphaBeta => AlphaBeta::NAME,
            StrategyKind::Expectimax => Expectimax::NAME,
        }
    }
}

/// Agent configuration as it is read from json.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    pub strategy: StrategyKind,
    /// Number of full rounds, one move per agent.
    pub depth: usize,
    pub evaluator: EvaluatorConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            depth: DEFAULT_DEPTH,
            evaluator: EvaluatorConfig::default(),
        }
    }
}

impl FromStr for AgentConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Configuration(e.to_string()))
    }
}

impl fmt::Display for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serde_json::to_string(self).unwrap_or_default())
    }
}

/// Agent that picks its moves with an adversarial tree search.
///
/// Strategy, depth and evaluator are fixed on construction.
#[derive(Debug, Clone)]
pub struct SearchAgent<E> {
    strategy: StrategyKind,
    depth: usize,
    evaluator: E,
}

impl<E> SearchAgent<E> {
    pub fn new(strategy: StrategyKind, depth: usize, evaluator: E) -> Result<Self> {
        if depth == 0 {
            return Err(Error::Configuration("depth has to be at least 1".into()));
        }
        Ok(Self {
            strategy,
            depth,
            evaluator,
        })
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches the state and returns the values of all root actions.
    pub fn search<S>(&self, state: &S) -> Result<SearchResult>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let start = Instant::now();
        let result = match self.strategy {
            StrategyKind::Minimax => {
                search::search_root(&Minimax, state, self.depth, &self.evaluator)
            }
            StrategyKind::AlphaBeta => {
                search::search_root(&AlphaBeta, state, self.depth, &self.evaluator)
            }
            StrategyKind::Expectimax => {
                search::search_root(&Expectimax, state, self.depth, &self.evaluator)
            }
        }?;

        info!(
            ">>> {} {} {:?}ms {} {} nodes={}",
            self.strategy.name(),
            self.depth,
            start.elapsed().as_millis(),
            result.action,
            result.value,
            result.stats.nodes,
        );
        Ok(result)
    }

    /// Returns the best action of the maximizing agent.
    pub fn choose_action<S>(&self, state: &S) -> Result<Action>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search(state).map(|r| r.action)
    }
}

impl SearchAgent<EvaluatorConfig> {
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        Self::new(config.strategy, config.depth, config.evaluator.clone())
    }
}
