//! Optimal play against seeded random opponents

use ttt_solver::{
    Mark, OptimalAgent, RandomAgent,
    agents::{evaluate, evaluate_with},
};

#[test]
fn test_optimal_never_loses_as_x() {
    for seed in 0..4 {
        let mut agent = OptimalAgent::new("optimal");
        let mut opponent = RandomAgent::with_seed("random", seed);
        let summary = evaluate(&mut agent, &mut opponent, 10, Mark::X).unwrap();
        assert_eq!(summary.losses, 0, "seed {seed}");
        assert_eq!(summary.games(), 10);
    }
}

#[test]
fn test_optimal_never_loses_as_o() {
    for seed in 0..4 {
        let mut agent = OptimalAgent::new("optimal");
        let mut opponent = RandomAgent::with_seed("random", seed);
        let summary = evaluate(&mut agent, &mut opponent, 10, Mark::O).unwrap();
        assert_eq!(summary.losses, 0, "seed {seed}");
    }
}

#[test]
fn test_evaluation_is_reproducible() {
    let run = |seed| {
        let mut agent = OptimalAgent::new("optimal");
        let mut opponent = RandomAgent::with_seed("random", seed);
        let mut boards = Vec::new();
        let summary = evaluate_with(&mut agent, &mut opponent, 5, Mark::X, |_, result| {
            boards.push(result.final_board.encode());
        })
        .unwrap();
        (summary, boards)
    };
    assert_eq!(run(42), run(42));
}
