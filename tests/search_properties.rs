//! Search correctness over known positions and the whole state space

use ttt_solver::{
    AlphaBeta, Board, Minimax, Move, OptimalAgent, Outcome, SearchConfig, Solver, best_move,
    initial_state, play_match, reachable_boards,
};

fn board(text: &str) -> Board {
    Board::from_string(text).unwrap()
}

mod known_positions {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        // X X .
        // O O .
        // . . .
        assert_eq!(best_move(&board("XX./OO./...")), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // X X .
        // O O .
        // X . .
        assert_eq!(best_move(&board("XX./OO./X..")), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_blocks_only_threat() {
        // X X .
        // . O .
        // . . .
        assert_eq!(best_move(&board("XX./.O./...")), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_opposite_corners_answered_on_an_edge() {
        // X . .
        // . O .
        // . . X
        let edges = [
            Move::new(0, 1),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 1),
        ];
        let mv = best_move(&board("X../.O./..X")).unwrap();
        assert!(edges.contains(&mv), "corner reply {mv} loses to a fork");
    }

    #[test]
    fn test_terminal_boards_have_no_move() {
        assert_eq!(best_move(&board("XXX/OO./...")), None);
        assert_eq!(best_move(&board("XOX/XOO/OXX")), None);
    }

    #[test]
    fn test_empty_board() {
        let mut engine = AlphaBeta::new();
        assert_eq!(engine.search(&initial_state()), (0, Some(Move::new(0, 0))));
    }
}

mod self_play {
    use super::*;

    #[test]
    fn test_optimal_self_play_is_a_draw() {
        let mut x = OptimalAgent::new("x");
        let mut o = OptimalAgent::new("o");
        let result = play_match(&mut x, &mut o, initial_state()).unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert!(result.final_board.is_full());
    }

    #[test]
    fn test_self_play_from_midgame_keeps_value() {
        // Every non-terminal reachable board finishes with its minimax value
        let mut reference = Minimax::memoized();
        for start in reachable_boards().into_iter().step_by(97) {
            let expected = reference.value(&start);
            let mut x = OptimalAgent::new("x");
            let mut o = OptimalAgent::new("o");
            let result = play_match(&mut x, &mut o, start).unwrap();
            assert_eq!(result.outcome.utility(), expected, "start {}", start.encode());
        }
    }
}

mod pruning_equivalence {
    use super::*;

    #[test]
    fn test_alphabeta_matches_minimax_on_every_board() {
        let mut reference = Minimax::memoized();
        for board in reachable_boards() {
            let expected_value = reference.value(&board);
            let expected_move = reference.best_move(&board);
            let (value, mv) = AlphaBeta::new().search(&board);
            assert_eq!(value, expected_value, "value for {}", board.encode());
            assert_eq!(mv, expected_move, "move for {}", board.encode());
        }
    }

    #[test]
    fn test_alphabeta_visits_fewer_nodes() {
        let mut pruned = AlphaBeta::new();
        pruned.search(&initial_state());
        let mut plain = Minimax::new();
        plain.value(&initial_state());

        assert!(pruned.stats().cutoffs > 0);
        assert!(pruned.stats().nodes < plain.stats().nodes);
    }

    #[test]
    fn test_parallel_root_matches_sequential() {
        let sequential = Solver::default();
        let parallel = Solver::new(SearchConfig::default().with_parallel_root(true));
        for board in reachable_boards().into_iter().step_by(11) {
            let a = sequential.search(&board);
            let b = parallel.search(&board);
            assert_eq!(a.best_move, b.best_move, "board {}", board.encode());
            assert_eq!(a.value, b.value, "board {}", board.encode());
        }
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let start = board("X../.O./...");
        let copy = start;
        Solver::default().search(&start);
        Solver::new(SearchConfig::default().with_pruning(false)).search(&start);
        assert_eq!(start, copy);
    }
}
