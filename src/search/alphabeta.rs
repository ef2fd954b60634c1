//! Minimax with alpha-beta pruning
//!
//! X maximizes and O minimizes the utility of the terminal board reached.
//! Children are visited in row-major order and the best move only changes
//! on a strictly better value, so among equally valued moves the first one
//! in row-major order is returned.

use super::stats::SearchStats;
use crate::tictactoe::{Board, Mark, Move};

/// Lower bound below every utility
pub const NEG_INF: i32 = i32::MIN;

/// Upper bound above every utility
pub const POS_INF: i32 = i32::MAX;

/// Alpha-beta search engine. Holds only counters; boards are passed by value
/// down the recursion.
#[derive(Debug, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best value and move for X, searching within `(alpha, beta)`.
    ///
    /// Terminal boards return their utility and no move.
    pub fn maximize(&mut self, board: &Board, mut alpha: i32, beta: i32) -> (i32, Option<Move>) {
        self.stats.nodes += 1;
        if let Some(outcome) = board.outcome() {
            self.stats.terminal_nodes += 1;
            return (outcome.utility(), None);
        }

        let mut best_value = NEG_INF;
        let mut best_move = None;

        for (mv, child) in board.successors() {
            let (value, _) = self.minimize(&child, alpha, beta);
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_value);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_value, best_move)
    }

    /// Best value and move for O, searching within `(alpha, beta)`.
    pub fn minimize(&mut self, board: &Board, alpha: i32, mut beta: i32) -> (i32, Option<Move>) {
        self.stats.nodes += 1;
        if let Some(outcome) = board.outcome() {
            self.stats.terminal_nodes += 1;
            return (outcome.utility(), None);
        }

        let mut best_value = POS_INF;
        let mut best_move = None;

        for (mv, child) in board.successors() {
            let (value, _) = self.maximize(&child, alpha, beta);
            if value < best_value {
                best_value = value;
                best_move = Some(mv);
            }
            beta = beta.min(best_value);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_value, best_move)
    }

    /// Search `board` from the full window for whichever side is to move
    pub fn search(&mut self, board: &Board) -> (i32, Option<Move>) {
        match board.current_player() {
            Mark::X => self.maximize(board, NEG_INF, POS_INF),
            Mark::O => self.minimize(board, NEG_INF, POS_INF),
        }
    }
}

/// Optimal move for the player to move, or `None` on a terminal board
pub fn best_move(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }
    AlphaBeta::new().search(board).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::initial_state;

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(best_move(&board), None);

        let mut engine = AlphaBeta::new();
        assert_eq!(engine.maximize(&board, NEG_INF, POS_INF), (1, None));
        assert_eq!(engine.stats().terminal_nodes, 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X .
        // O O .
        // . . .
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(best_move(&board), Some(Move::new(0, 2)));
        assert_eq!(AlphaBeta::new().search(&board).0, 1);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // X X .
        // O O .
        // X . .
        let board = Board::from_string("XX.OO.X..").unwrap();
        assert_eq!(board.current_player(), Mark::O);
        assert_eq!(best_move(&board), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        let mut engine = AlphaBeta::new();
        let (value, mv) = engine.search(&initial_state());
        assert_eq!(value, 0);
        assert_eq!(mv, Some(Move::new(0, 0)));
        assert!(engine.stats().cutoffs > 0);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let board = Board::from_string("X...O....").unwrap();
        let copy = board;
        let _ = best_move(&board);
        assert_eq!(board, copy);
    }
}
