//! Search flags shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::search::SearchConfig;

/// Flags that select how the solver searches
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON file with a search configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable alpha-beta pruning and walk the full tree
    #[arg(long)]
    pub no_pruning: bool,

    /// Evaluate root moves in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl SearchArgs {
    /// Build the search configuration: file values first, then flags.
    pub fn resolve(&self) -> crate::Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_json_file(path)?,
            None => SearchConfig::default(),
        };
        if self.no_pruning {
            config.pruning = false;
        }
        if self.parallel {
            config.parallel_root = true;
        }
        Ok(config)
    }
}
