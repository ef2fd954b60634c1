//! Best-move command - Search one board and report the optimal move

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::{
        config::SearchArgs,
        output::{describe_stats, describe_value, format_moves, mark_label, print_board, print_kv, print_section},
    },
    search::{SearchConfig, SearchReport, Solver},
    tictactoe::{LineAnalyzer, Mark, Move},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a board")]
pub struct BestMoveArgs {
    /// Board as nine cells in row-major order, e.g. `XX./OO./...`
    pub board: String,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BestMoveOutput {
    board: String,
    to_move: Mark,
    config: SearchConfig,
    report: SearchReport,
    opponent_threats: Vec<Move>,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let solver = Solver::new(args.search.resolve()?);
    let config = *solver.config();
    let report = solver.search(&board);
    let to_move = board.current_player();
    let opponent_threats = if board.is_terminal() {
        Vec::new()
    } else {
        LineAnalyzer::winning_moves(&board, to_move.opponent())
    };

    if args.json {
        let output = BestMoveOutput {
            board: board.encode(),
            to_move,
            config,
            report,
            opponent_threats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_section("Position");
    print_board(&board);

    print_section("Search Result");
    if let Some(outcome) = board.outcome() {
        print_kv("Game over", &outcome.to_string());
    } else {
        print_kv("To move", mark_label(to_move));
    }
    match report.best_move {
        Some(mv) => print_kv("Best move", &mv.to_string()),
        None => print_kv("Best move", "none"),
    }
    print_kv("Value", &format!("{} ({})", report.value, describe_value(report.value)));
    print_kv("Pruning", if config.pruning { "on" } else { "off" });
    print_kv("Parallel root", if config.parallel_root { "on" } else { "off" });
    print_kv("Search", &describe_stats(&report.stats));
    print_kv("Opponent threats", &format_moves(&opponent_threats));

    Ok(())
}
