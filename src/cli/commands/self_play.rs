//! Self-play command - Play the optimal agent against itself

use anyhow::Result;
use clap::Parser;

use super::parse_board;
use crate::{
    agents::{Agent, OptimalAgent},
    cli::{
        config::SearchArgs,
        output::{print_board, print_kv, print_section},
    },
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Play optimal against optimal and show every position")]
pub struct SelfPlayArgs {
    /// Starting board (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let mut board = match &args.board {
        Some(text) => parse_board(text)?,
        None => Board::new(),
    };
    let config = args.search.resolve()?;
    let mut x = OptimalAgent::with_config("optimal-x", config);
    let mut o = OptimalAgent::with_config("optimal-o", config);

    print_section("Start");
    print_board(&board);

    let mut ply = 0;
    let outcome = loop {
        if let Some(outcome) = board.outcome() {
            break outcome;
        }
        let mover = board.current_player();
        let mv = match mover {
            Mark::X => x.select_move(&board)?,
            Mark::O => o.select_move(&board)?,
        };
        board = board.apply(mv)?;
        ply += 1;

        println!("\nPly {ply}: {mover} plays {mv}");
        print_board(&board);
    };

    print_section("Result");
    print_kv("Outcome", &outcome.to_string());
    print_kv("Plies", &ply.to_string());
    print_kv("Final board", &board.encode());

    Ok(())
}
