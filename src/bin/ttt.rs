//! ttt - Optimal tic-tac-toe analysis from the command line
//!
//! - Finding the best move for a board
//! - Watching optimal self-play
//! - Evaluating optimal play against a random baseline
//! - Verifying alpha-beta against plain minimax over the whole state space

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Optimal tic-tac-toe by game-tree search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a board
    BestMove(ttt_solver::cli::commands::best_move::BestMoveArgs),

    /// Play optimal against optimal to the end
    SelfPlay(ttt_solver::cli::commands::self_play::SelfPlayArgs),

    /// Evaluate optimal play against a random opponent
    Evaluate(ttt_solver::cli::commands::evaluate::EvaluateArgs),

    /// Check pruning equivalence over all reachable boards
    Verify(ttt_solver::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BestMove(args) => ttt_solver::cli::commands::best_move::execute(args),
        Commands::SelfPlay(args) => ttt_solver::cli::commands::self_play::execute(args),
        Commands::Evaluate(args) => ttt_solver::cli::commands::evaluate::execute(args),
        Commands::Verify(args) => ttt_solver::cli::commands::verify::execute(args),
    }
}
