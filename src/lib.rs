//! Optimal Tic-Tac-Toe play by exhaustive game-tree search
//!
//! This crate provides:
//! - A 3x3 board model with value semantics and reachability validation
//! - The rule engine: turn order, legal moves, move application, win detection
//! - Minimax search with alpha-beta pruning, plus a plain minimax reference
//! - Agents and match play for checking that optimal play never loses
//!
//! ```
//! use ttt_solver::{Move, best_move, initial_state};
//!
//! // X to move with two in the top row takes the win
//! let board = ttt_solver::Board::from_string("XX./OO./...").unwrap();
//! assert_eq!(best_move(&board), Some(Move::new(0, 2)));
//! assert!(best_move(&initial_state()).is_some());
//! ```

pub mod agents;
pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use agents::{Agent, MatchResult, MatchSummary, OptimalAgent, RandomAgent, play_match};
pub use error::{Error, MoveRejection, Result};
pub use search::{
    AlphaBeta, Minimax, SearchConfig, SearchReport, SearchStats, Solver, best_move,
};
pub use tictactoe::{
    Board, Cell, Mark, Move, Outcome, apply, current_player, initial_state, is_terminal,
    legal_moves, reachable_boards, utility, winner,
};
