use std::process::ExitCode;

use corner_puzzle::core::PuzzleState;
use corner_puzzle::search::{SearchConfig, Solver};

// Settings come from PUZZLE_STRATEGY, PUZZLE_MAX_DEPTH, PUZZLE_MAX_NODES and
// PUZZLE_ALL_MOVES; log output is controlled by RUST_LOG.
fn main() -> ExitCode {
    env_logger::init();

    let config = SearchConfig::from_env();
    let start = PuzzleState::default();
    println!("Start {start}");
    print!("{}", start.render());

    let mut solver = Solver::new(config);
    let solution = solver.solve(start);
    let stats = solver.stats();

    let code = match solution {
        Some(moves) => {
            println!("Solved in {} moves", moves.len());
            let mut state = start;
            for (i, mv) in moves.iter().enumerate() {
                state = state.apply(*mv);
                println!();
                println!("{:>3}. {mv}", i + 1);
                print!("{}", state.render());
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("No solution found");
            ExitCode::FAILURE
        }
    };

    println!();
    println!(
        "Expanded {} nodes ({} duplicates, max depth {}) in {:.3}s, {:.0} nodes/s",
        stats.nodes_expanded,
        stats.duplicates,
        stats.max_depth,
        stats.time_us as f64 / 1_000_000.0,
        stats.nodes_per_second()
    );
    code
}
