//! Terminal outcomes and their utility

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark};
use crate::error::Error;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl Outcome {
    /// Score from X's perspective: +1 X wins, -1 O wins, 0 draw
    pub fn utility(self) -> i32 {
        match self {
            Outcome::Win(Mark::X) => 1,
            Outcome::Win(Mark::O) => -1,
            Outcome::Draw => 0,
        }
    }

    /// Whether `mark` lost this game
    pub fn is_loss_for(self, mark: Mark) -> bool {
        self == Outcome::Win(mark.opponent())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl Board {
    /// Outcome of the game, or `None` while moves remain and nobody has won
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.winner() {
            Some(Outcome::Win(mark))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Utility of a terminal board from X's perspective.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`] when the game is still in progress.
    pub fn utility(&self) -> Result<i32, Error> {
        self.outcome()
            .map(Outcome::utility)
            .ok_or(Error::NotTerminal)
    }
}

/// Utility of a terminal `board`; fails on a board still in play
pub fn utility(board: &Board) -> Result<i32, Error> {
    board.utility()
}
