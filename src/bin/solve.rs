use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;

use plysearch::agents::{SearchAgent, StrategyKind, DEFAULT_DEPTH};
use plysearch::eval::ScoreEvaluator;
use plysearch::logging;
use plysearch::tree::TreeGame;
use plysearch::Result;

#[derive(Parser)]
#[command(name = "plysearch solve", about = "Search the best move in a game tree.")]
struct Opts {
    /// JSON file with the game tree.
    tree: PathBuf,
    #[arg(long, value_enum, default_value_t = StrategyKind::Minimax)]
    strategy: StrategyKind,
    /// Number of full rounds that are searched.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
    /// Overrides the number of agents of the tree.
    #[arg(long)]
    agents: Option<usize>,
    /// Runs all strategies one after another.
    #[arg(long)]
    all: bool,
}

fn main() -> ExitCode {
    logging();

    let opts = Opts::parse();
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Opts) -> Result<()> {
    let mut game: TreeGame = serde_json::from_str(&std::fs::read_to_string(&opts.tree)?)?;
    if let Some(agents) = opts.agents {
        game.agents = agents;
    }
    info!("{} nodes, {} agents", game.root.size(), game.agents);

    let strategies = if opts.all {
        vec![
            StrategyKind::Minimax,
            StrategyKind::AlphaBeta,
            StrategyKind::Expectimax,
        ]
    } else {
        vec![opts.strategy]
    };

    for strategy in strategies {
        let agent = SearchAgent::new(strategy, opts.depth, ScoreEvaluator)?;
        let result = agent.search(&game)?;

        println!("{}", strategy.name().bright_green());
        for (action, value) in &result.values {
            if *action == result.action {
                println!("  {:>6} {}", action.bold(), value.bold());
            } else {
                println!("  {:>6} {}", action, value);
            }
        }
        println!(
            "  nodes={} evaluations={} cutoffs={}",
            result.stats.nodes, result.stats.evaluations, result.stats.cutoffs
        );
    }
    Ok(())
}
