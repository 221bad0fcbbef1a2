use super::{Backup, Flow, Strategy, Window};

/// Plain minimax.
///
/// The agent with id 0 is maximizing, all others are minimizing.
/// Every node of the tree up to the depth limit is visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Strategy for Minimax {
    const NAME: &'static str = "minimax";

    fn combine_adversary(&self, node: &mut Backup, child: f64, _window: &mut Window) -> Flow {
        node.push_min(child);
        Flow::Continue
    }
}
