//! Subcommands of the `ttt` binary

pub mod best_move;
pub mod evaluate;
pub mod self_play;
pub mod verify;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::tictactoe::{Board, Mark};

/// Parse a board argument such as `XX./OO./...`
pub fn parse_board(text: &str) -> Result<Board> {
    Board::from_string(text).with_context(|| format!("invalid board '{text}'"))
}

/// Mark selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// First player
    X,
    /// Second player
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
