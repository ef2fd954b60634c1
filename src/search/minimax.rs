//! Exhaustive minimax without pruning
//!
//! Every child of every node is evaluated. A solver built with
//! [`Minimax::memoized`] caches values per board so repeated queries over the
//! whole state space stay cheap; the cache never changes a value, only how
//! often a subtree is walked.

use std::collections::HashMap;

use super::stats::SearchStats;
use crate::tictactoe::{Board, Mark, Move};

/// Plain minimax solver, optionally memoized
#[derive(Debug, Default)]
pub struct Minimax {
    cache: Option<HashMap<Board, i32>>,
    stats: SearchStats,
}

impl Minimax {
    /// Solver that walks the full game tree on every query
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver that remembers the value of every board it has evaluated
    pub fn memoized() -> Self {
        Self {
            cache: Some(HashMap::new()),
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of boards whose value is cached
    pub fn cached_boards(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }

    /// Minimax value of `board` from X's perspective
    pub fn value(&mut self, board: &Board) -> i32 {
        if let Some(&value) = self.cache.as_ref().and_then(|cache| cache.get(board)) {
            return value;
        }

        self.stats.nodes += 1;
        let value = if let Some(outcome) = board.outcome() {
            self.stats.terminal_nodes += 1;
            outcome.utility()
        } else {
            let maximizing = board.current_player() == Mark::X;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for (_, child) in board.successors() {
                let value = self.value(&child);
                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
            best
        };

        if let Some(cache) = self.cache.as_mut() {
            cache.insert(*board, value);
        }
        value
    }

    /// Value of the board reached by each legal move, in row-major order.
    ///
    /// Empty for terminal boards.
    pub fn move_values(&mut self, board: &Board) -> Vec<(Move, i32)> {
        if board.is_terminal() {
            return Vec::new();
        }
        board
            .successors()
            .map(|(mv, child)| (mv, self.value(&child)))
            .collect()
    }

    /// Value and first optimal move in one pass over the root's children.
    ///
    /// The root counts as one node; each child subtree is walked once.
    pub fn search(&mut self, board: &Board) -> (i32, Option<Move>) {
        if let Some(outcome) = board.outcome() {
            self.stats.nodes += 1;
            self.stats.terminal_nodes += 1;
            return (outcome.utility(), None);
        }

        self.stats.nodes += 1;
        let values = self.move_values(board);
        let (best_move, value) = match first_best(board.current_player(), &values) {
            Some((mv, value)) => (Some(mv), value),
            None => (None, 0),
        };
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(*board, value);
        }
        (value, best_move)
    }

    /// First move in row-major order achieving the minimax value
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let values = self.move_values(board);
        first_best(board.current_player(), &values).map(|(mv, _)| mv)
    }

    /// All moves achieving the minimax value, in row-major order
    pub fn optimal_moves(&mut self, board: &Board) -> Vec<Move> {
        let values = self.move_values(board);
        let target = if board.current_player() == Mark::X {
            values.iter().map(|&(_, v)| v).max()
        } else {
            values.iter().map(|&(_, v)| v).min()
        };

        match target {
            Some(target) => values
                .into_iter()
                .filter(|&(_, v)| v == target)
                .map(|(mv, _)| mv)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// First entry with a strictly better value for `mover`
fn first_best(mover: Mark, values: &[(Move, i32)]) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for &(mv, value) in values {
        let better = match best {
            None => true,
            Some((_, best_value)) if mover == Mark::X => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if better {
            best = Some((mv, value));
        }
    }
    best
}
