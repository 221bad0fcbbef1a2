//! Explicit game trees, defined in code or loaded from JSON.
//!
//! ```json
//! {
//!   "agents": 2,
//!   "root": {"moves": [
//!     {"action": "north", "node": {"moves": [
//!       {"action": "north", "node": {"score": 3}},
//!       {"action": "south", "node": {"outcome": "lose"}}
//!     ]}}
//!   ]}
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::env::Action;
use crate::error::{Error, Result};
use crate::game::GameState;

/// Whether a node ends the game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    None,
    Win,
    Lose,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Edge {
    pub action: Action,
    pub node: Arc<Node>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Node {
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub score: f64,
    /// Moves of whichever agent is to move in this node.
    #[serde(default)]
    pub moves: Vec<Edge>,
}

impl Node {
    pub fn leaf(score: f64) -> Node {
        Node {
            score,
            ..Node::default()
        }
    }

    pub fn win() -> Node {
        Node {
            outcome: Outcome::Win,
            ..Node::default()
        }
    }

    pub fn lose() -> Node {
        Node {
            outcome: Outcome::Lose,
            ..Node::default()
        }
    }

    pub fn branch(moves: Vec<(Action, Node)>) -> Node {
        Node {
            moves: moves
                .into_iter()
                .map(|(action, node)| Edge {
                    action,
                    node: Arc::new(node),
                })
                .collect(),
            ..Node::default()
        }
    }

    /// Complete tree with `branching` moves per node (at most four) and
    /// `height` levels. Leaves are scored by `leaf` in depth-first order.
    pub fn uniform(branching: usize, height: usize, leaf: &mut impl FnMut() -> f64) -> Node {
        assert!(branching <= 4, "Only up to 4 moves per node are supported");
        if height == 0 {
            return Node::leaf(leaf());
        }
        Node::branch(
            Action::iter()
                .take(branching)
                .map(|a| (a, Node::uniform(branching, height - 1, &mut *leaf)))
                .collect(),
        )
    }

    /// Number of nodes in this subtree.
    pub fn size(&self) -> usize {
        1 + self.moves.iter().map(|e| e.node.size()).sum::<usize>()
    }
}

/// A position inside an explicit game tree.
///
/// Cloning and moving are cheap, subtrees are shared.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TreeGame {
    pub agents: usize,
    pub root: Arc<Node>,
}

impl TreeGame {
    pub fn new(agents: usize, root: Node) -> TreeGame {
        TreeGame {
            agents,
            root: Arc::new(root),
        }
    }
}

impl GameState for TreeGame {
    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: usize) -> Vec<Action> {
        self.root.moves.iter().map(|e| e.action).collect()
    }

    fn successor(&self, agent: usize, action: Action) -> Result<Self> {
        let edge = self
            .root
            .moves
            .iter()
            .find(|e| e.action == action)
            .ok_or(Error::InvalidAction { agent, action })?;
        Ok(TreeGame {
            agents: self.agents,
            root: edge.node.clone(),
        })
    }

    fn is_win(&self) -> bool {
        self.root.outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.root.outcome == Outcome::Lose
    }

    fn score(&self) -> f64 {
        self.root.score
    }
}
