//! Tic-Tac-Toe board model and rules

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod outcome;
pub mod rules;
pub mod validation;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Mark, Move, initial_state};
pub use game_tree::{REACHABLE_BOARD_COUNT, decision_boards, reachable_boards};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Outcome, utility};
pub use rules::{apply, current_player, is_terminal, legal_moves, winner};
