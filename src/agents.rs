//! Move-selecting agents and match play
//!
//! An [`Agent`] is anything that picks a move for a board: the optimal
//! searcher, or a random baseline used to check that optimal play never
//! loses. Matches keep only the final board; no per-move history is stored.

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    search::{SearchConfig, Solver},
    tictactoe::{Board, Mark, Move, Outcome},
};

/// A player that chooses moves
pub trait Agent: Send {
    /// Select a move for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] on a terminal board.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Get the agent's name.
    fn name(&self) -> &str;
}

/// Plays the move returned by alpha-beta search
#[derive(Debug, Clone)]
pub struct OptimalAgent {
    name: String,
    solver: Solver,
}

impl OptimalAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            solver: Solver::new(config),
        }
    }
}

impl Agent for OptimalAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        self.solver.best_move(board).ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy agent (baseline)
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        let moves = board.legal_moves();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// How a single match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub final_board: Board,
    pub outcome: Outcome,
    /// Moves played from the starting board
    pub plies: usize,
}

/// Play `x` against `o` from `start` until the game ends.
///
/// # Errors
///
/// Propagates agent errors and [`Error::InvalidMove`] if an agent picks an
/// illegal move.
pub fn play_match(x: &mut dyn Agent, o: &mut dyn Agent, start: Board) -> Result<MatchResult> {
    let mut board = start;
    let mut plies = 0;

    let outcome = loop {
        if let Some(outcome) = board.outcome() {
            break outcome;
        }

        let mover = board.current_player();
        let mv = match mover {
            Mark::X => x.select_move(&board)?,
            Mark::O => o.select_move(&board)?,
        };
        debug!(%mover, %mv, "move selected");
        board = board.apply(mv)?;
        plies += 1;
    };

    info!(x = x.name(), o = o.name(), %outcome, plies, "match finished");
    Ok(MatchResult {
        final_board: board,
        outcome,
        plies,
    })
}

/// Tally of several matches from one agent's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    /// Count one finished match for the agent playing `mark`
    pub fn record(&mut self, outcome: Outcome, mark: Mark) {
        if outcome.is_loss_for(mark) {
            self.losses += 1;
        } else if outcome == Outcome::Draw {
            self.draws += 1;
        } else {
            self.wins += 1;
        }
    }
}

/// Play `games` matches from the empty board with `agent` holding
/// `agent_mark`, calling `on_game` after each one.
pub fn evaluate_with<F>(
    agent: &mut dyn Agent,
    opponent: &mut dyn Agent,
    games: usize,
    agent_mark: Mark,
    mut on_game: F,
) -> Result<MatchSummary>
where
    F: FnMut(usize, &MatchResult),
{
    let mut summary = MatchSummary::default();

    for game in 0..games {
        let result = match agent_mark {
            Mark::X => play_match(agent, opponent, Board::new())?,
            Mark::O => play_match(opponent, agent, Board::new())?,
        };
        summary.record(result.outcome, agent_mark);
        on_game(game, &result);
    }

    info!(
        agent = agent.name(),
        opponent = opponent.name(),
        wins = summary.wins,
        draws = summary.draws,
        losses = summary.losses,
        "evaluation finished"
    );
    Ok(summary)
}

/// Play `games` matches from the empty board with `agent` holding `agent_mark`
pub fn evaluate(
    agent: &mut dyn Agent,
    opponent: &mut dyn Agent,
    games: usize,
    agent_mark: Mark,
) -> Result<MatchSummary> {
    evaluate_with(agent, opponent, games, agent_mark, |_, _| {})
}
