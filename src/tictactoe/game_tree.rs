//! Enumeration of the reachable state space

use std::collections::{HashSet, VecDeque};

use super::board::Board;

/// Number of distinct boards reachable from the empty board, terminal ones
/// included.
pub const REACHABLE_BOARD_COUNT: usize = 5478;

/// Every board reachable from the empty board by legal play, in
/// breadth-first order (so boards are sorted by number of marks).
///
/// Terminal boards are included but not expanded.
pub fn reachable_boards() -> Vec<Board> {
    let mut boards = Vec::with_capacity(REACHABLE_BOARD_COUNT);
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let root = Board::new();
    queue.push_back(root);
    visited.insert(root);

    while let Some(board) = queue.pop_front() {
        boards.push(board);
        if board.is_terminal() {
            continue;
        }

        for (_, child) in board.successors() {
            if visited.insert(child) {
                queue.push_back(child);
            }
        }
    }

    boards
}

/// Reachable boards where the game is still in progress
pub fn decision_boards() -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_board_count() {
        let boards = reachable_boards();
        assert_eq!(boards.len(), REACHABLE_BOARD_COUNT);
        assert_eq!(boards[0], Board::new());
    }

    #[test]
    fn test_every_reachable_board_validates() {
        for board in reachable_boards() {
            assert!(board.is_reachable(), "enumerated an invalid board:\n{board}");
        }
    }

    #[test]
    fn test_breadth_first_order() {
        let boards = reachable_boards();
        assert!(
            boards
                .windows(2)
                .all(|pair| pair[0].occupied_count() <= pair[1].occupied_count())
        );
    }

    #[test]
    fn test_decision_boards_exclude_terminal() {
        let decisions = decision_boards();
        assert!(decisions.iter().all(|board| !board.is_terminal()));
        // 958 terminal positions: 626 X wins, 316 O wins, 16 draws
        assert_eq!(decisions.len(), REACHABLE_BOARD_COUNT - 958);
    }
}
