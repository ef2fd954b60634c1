//! Verify command - Check alpha-beta against plain minimax on every board

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, describe_stats, format_number, print_kv, print_section},
    search::{AlphaBeta, Minimax, SearchConfig, Solver},
    tictactoe::{initial_state, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Verify pruning equivalence over all reachable boards")]
pub struct VerifyArgs {
    /// Also compare parallel root search on every board
    #[arg(long)]
    pub parallel: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let spinner = create_spinner("Enumerating reachable boards...");
    let boards = reachable_boards();
    let terminal = boards.iter().filter(|b| b.is_terminal()).count();

    spinner.set_message("Comparing alpha-beta with plain minimax...");
    let mut reference = Minimax::memoized();
    let parallel = Solver::new(SearchConfig::default().with_parallel_root(true));
    let mut mismatches = Vec::new();

    for board in boards.iter().filter(|b| !b.is_terminal()) {
        let expected = reference.search(board);
        let mut engine = AlphaBeta::new();
        let (value, best_move) = engine.search(board);
        if (value, best_move) != expected {
            mismatches.push(board.encode());
            continue;
        }
        if args.parallel {
            let report = parallel.search(board);
            if (report.value, report.best_move) != expected {
                mismatches.push(board.encode());
            }
        }
    }
    spinner.finish_and_clear();

    let pruned = Solver::default().search(&initial_state());
    let plain = Solver::new(SearchConfig::default().with_pruning(false)).search(&initial_state());

    print_section("State Space");
    print_kv("Reachable boards", &format_number(boards.len() as u64));
    print_kv("Terminal boards", &format_number(terminal as u64));
    print_kv("Decision boards", &format_number((boards.len() - terminal) as u64));

    print_section("Search From Empty Board");
    print_kv("Alpha-beta", &describe_stats(&pruned.stats));
    print_kv("Plain minimax", &describe_stats(&plain.stats));
    print_kv("Value", &pruned.value.to_string());

    print_section("Pruning Equivalence");
    print_kv("Mismatches", &format_number(mismatches.len() as u64));
    for encoded in mismatches.iter().take(10) {
        println!("    {encoded}");
    }

    if !mismatches.is_empty() {
        bail!("{} board(s) disagree between search variants", mismatches.len());
    }
    Ok(())
}
