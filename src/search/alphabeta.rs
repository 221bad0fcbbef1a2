use super::{Backup, Flow, Strategy, Window};

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - Assumes the maximizing agent has id 0
/// - One window is shared by all adversaries of a round
///
/// The backed up root values are the same as for [`super::Minimax`],
/// only fewer nodes are visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl Strategy for AlphaBeta {
    const NAME: &'static str = "alphabeta";

    fn combine_maximizer(&self, node: &mut Backup, child: f64, window: &mut Window) -> Flow {
        node.push_max(child);
        if node.value >= window.beta {
            return Flow::Cutoff;
        }
        window.alpha = window.alpha.max(node.value);
        Flow::Continue
    }

    fn combine_adversary(&self, node: &mut Backup, child: f64, window: &mut Window) -> Flow {
        node.push_min(child);
        if node.value <= window.alpha {
            return Flow::Cutoff;
        }
        window.beta = window.beta.min(node.value);
        Flow::Continue
    }
}
