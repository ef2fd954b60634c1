//! Search configuration.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Configuration for a [`Solver`](super::Solver).
///
/// # Examples
///
/// ```
/// use ttt_solver::SearchConfig;
///
/// let config = SearchConfig::default().with_pruning(false).with_parallel_root(true);
/// assert!(!config.pruning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Use alpha-beta pruning; when off, plain minimax visits every node
    pub pruning: bool,
    /// Evaluate the root's children on the rayon thread pool
    pub parallel_root: bool,
}

impl SearchConfig {
    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Enable or disable parallel evaluation of root moves.
    pub fn with_parallel_root(mut self, parallel_root: bool) -> Self {
        self.parallel_root = parallel_root;
        self
    }

    /// Load a configuration from a JSON file. Missing fields keep their
    /// defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read search config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            parallel_root: false,
        }
    }
}
