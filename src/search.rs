//! Game-tree search for the optimal move
//!
//! [`best_move`] is the plain entry point. [`Solver`] adds configuration
//! (pruning, root parallelism) and reports the value and node counts along
//! with the move.

pub mod alphabeta;
pub mod config;
pub mod minimax;
pub mod stats;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

pub use alphabeta::{AlphaBeta, NEG_INF, POS_INF, best_move};
pub use config::SearchConfig;
pub use minimax::Minimax;
pub use stats::SearchStats;

use crate::tictactoe::{Board, Mark, Move};

/// Result of searching one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move; `None` when the board is terminal
    pub best_move: Option<Move>,
    /// Minimax value from X's perspective
    pub value: i32,
    pub stats: SearchStats,
}

/// Configurable front end over the search engines
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `board` for the player to move.
    ///
    /// Every configuration returns the same move: children are always
    /// considered in row-major order and the first strictly best one wins.
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode()))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let report = if let Some(outcome) = board.outcome() {
            SearchReport {
                best_move: None,
                value: outcome.utility(),
                stats: SearchStats {
                    nodes: 1,
                    terminal_nodes: 1,
                    cutoffs: 0,
                },
            }
        } else if self.config.parallel_root {
            self.search_parallel(board)
        } else if self.config.pruning {
            let mut engine = AlphaBeta::new();
            let (value, best_move) = engine.search(board);
            SearchReport {
                best_move,
                value,
                stats: engine.stats(),
            }
        } else {
            let mut engine = Minimax::new();
            let (value, best_move) = engine.search(board);
            SearchReport {
                best_move,
                value,
                stats: engine.stats(),
            }
        };

        debug!(
            best_move = ?report.best_move,
            value = report.value,
            nodes = report.stats.nodes,
            cutoffs = report.stats.cutoffs,
            "search complete"
        );
        report
    }

    /// Optimal move for the player to move, or `None` on a terminal board
    pub fn best_move(&self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Evaluate each root child independently with a full window, then pick
    /// the first strictly best child in row-major order.
    fn search_parallel(&self, board: &Board) -> SearchReport {
        let maximizing = board.current_player() == Mark::X;
        let pruning = self.config.pruning;
        let children: Vec<(Move, Board)> = board.successors().collect();

        let scored: Vec<(Move, i32, SearchStats)> = children
            .into_par_iter()
            .map(|(mv, child)| {
                let (value, stats) = if pruning {
                    let mut engine = AlphaBeta::new();
                    let (value, _) = if maximizing {
                        engine.minimize(&child, NEG_INF, POS_INF)
                    } else {
                        engine.maximize(&child, NEG_INF, POS_INF)
                    };
                    (value, engine.stats())
                } else {
                    let mut engine = Minimax::new();
                    (engine.value(&child), engine.stats())
                };
                trace!(%mv, value, nodes = stats.nodes, "root move evaluated");
                (mv, value, stats)
            })
            .collect();

        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let mut best: Option<(Move, i32)> = None;

        for (mv, value, child_stats) in scored {
            stats += child_stats;
            let better = match best {
                None => true,
                Some((_, best_value)) if maximizing => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if better {
                best = Some((mv, value));
            }
        }

        SearchReport {
            best_move: best.map(|(mv, _)| mv),
            value: best.map_or(0, |(_, value)| value),
            stats,
        }
    }
}
