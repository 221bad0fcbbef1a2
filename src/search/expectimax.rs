use super::{Backup, Flow, Strategy, Window};

/// Expectimax search.
///
/// The maximizing agent behaves as in minimax, the adversaries pick one of
/// their legal moves uniformly at random. Adversary nodes are backed up with
/// the mean of their children and nothing is pruned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expectimax;

impl Strategy for Expectimax {
    const NAME: &'static str = "expectimax";

    fn combine_adversary(&self, node: &mut Backup, child: f64, _window: &mut Window) -> Flow {
        node.push(child);
        Flow::Continue
    }

    fn adversary_value(&self, node: &Backup) -> f64 {
        node.mean()
    }
}
