//! Evaluate command - Play the optimal agent against a random baseline

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use super::MarkArg;
use crate::{
    agents::{MatchSummary, OptimalAgent, RandomAgent, evaluate_with},
    cli::{
        config::SearchArgs,
        output::{create_game_progress, mark_label, print_kv, print_section},
    },
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate optimal play against a random opponent")]
pub struct EvaluateArgs {
    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for the opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which mark the optimal agent plays
    #[arg(long, value_enum, default_value_t = MarkArg::X)]
    pub agent_mark: MarkArg,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EvaluationOutput {
    games: usize,
    seed: Option<u64>,
    agent_mark: String,
    summary: MatchSummary,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let agent_mark = Mark::from(args.agent_mark);
    let config = args.search.resolve()?;

    let mut agent = OptimalAgent::with_config("optimal", config);
    let mut opponent = match args.seed {
        Some(seed) => RandomAgent::with_seed("random", seed),
        None => RandomAgent::new("random"),
    };

    let pb = (!args.json).then(|| create_game_progress(args.games as u64));
    let summary = evaluate_with(
        &mut agent,
        &mut opponent,
        args.games,
        agent_mark,
        |_, result| {
            if let Some(pb) = &pb {
                pb.set_message(result.outcome.to_string());
                pb.inc(1);
            }
        },
    )?;
    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    if args.json {
        let output = EvaluationOutput {
            games: args.games,
            seed: args.seed,
            agent_mark: agent_mark.to_string(),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_section("Evaluation");
        print_kv("Agent plays", mark_label(agent_mark));
        print_kv("Games", &summary.games().to_string());
        print_kv("Wins", &summary.wins.to_string());
        print_kv("Draws", &summary.draws.to_string());
        print_kv("Losses", &summary.losses.to_string());
    }

    if summary.losses > 0 {
        bail!("optimal agent lost {} game(s)", summary.losses);
    }
    Ok(())
}
