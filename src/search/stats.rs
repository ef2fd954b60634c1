//! Node counters collected during search

use std::{fmt, ops::AddAssign};

use serde::{Deserialize, Serialize};

/// Counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included
    pub nodes: u64,
    /// Visited boards that were terminal
    pub terminal_nodes: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.terminal_nodes += other.terminal_nodes;
        self.cutoffs += other.cutoffs;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes ({} terminal, {} cutoffs)",
            self.nodes, self.terminal_nodes, self.cutoffs
        )
    }
}
