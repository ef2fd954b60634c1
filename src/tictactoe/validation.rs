//! Board state validation logic

use super::{
    board::{Board, CELL_COUNT, Cell, Mark},
    lines::LineAnalyzer,
};
use crate::error::Error;

impl Board {
    /// Check that the board can arise from the empty board by legal,
    /// alternating play with X first and no moves after a win.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPieceCounts`] when X is not level with O or one ahead
    /// - [`Error::UnreachableBoard`] for impossible winning configurations
    pub fn validate(&self) -> Result<(), Error> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);

        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        let unreachable = |reason: &str| Error::UnreachableBoard {
            reason: reason.to_string(),
        };

        let x_wins = LineAnalyzer::has_won(self.cells(), Mark::X);
        let o_wins = LineAnalyzer::has_won(self.cells(), Mark::O);

        if x_wins && o_wins {
            return Err(unreachable("both players have a winning line"));
        }

        // The winner must have made the last move
        if x_wins && x_count != o_count + 1 {
            return Err(unreachable("X has a line but O has moved since"));
        }
        if o_wins && x_count != o_count {
            return Err(unreachable("O has a line but X has moved since"));
        }

        for mark in [Mark::X, Mark::O] {
            if !self.winning_lines_share_cell(mark) {
                return Err(unreachable(
                    "winning lines do not share a cell, so play continued after a win",
                ));
            }
        }

        Ok(())
    }

    /// Whether [`Board::validate`] accepts this board
    pub fn is_reachable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if all winning lines for a mark share at least one cell.
    ///
    /// Several lines can only be completed at once by the final move, which
    /// lies on all of them.
    pub fn winning_lines_share_cell(&self, mark: Mark) -> bool {
        let lines = LineAnalyzer::winning_lines(self.cells(), mark);
        if lines.len() < 2 {
            return true;
        }

        (0..CELL_COUNT).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Move, initial_state};

    fn unchecked(s: &str) -> Board {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (i, c) in s.chars().enumerate() {
            rows[i / 3][i % 3] = Cell::from_char(c).unwrap();
        }
        Board::from_rows(rows)
    }

    #[test]
    fn test_empty_board_is_valid() {
        assert!(initial_state().is_reachable());
    }

    #[test]
    fn test_o_first_is_invalid() {
        let err = unchecked("O........").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 1
            }
        ));
    }

    #[test]
    fn test_large_piece_difference_is_invalid() {
        assert!(!unchecked("XXXX.....").is_reachable());
    }

    #[test]
    fn test_both_winners_is_invalid() {
        let err = unchecked("XXXOOO...").validate().unwrap_err();
        assert!(err.to_string().contains("both players"));
    }

    #[test]
    fn test_move_after_x_win_is_invalid() {
        // X won on the top row, then O kept playing
        assert!(!unchecked("XXXOOO.O.").is_reachable());
        assert!(!unchecked("XXXOO.O..").is_reachable());
    }

    #[test]
    fn test_move_after_o_win_is_invalid() {
        assert!(!unchecked("OOOXX.XX.").is_reachable());
        assert!(unchecked("OOOXX.X.X").validate().is_err());
    }

    #[test]
    fn test_double_line_requires_shared_cell() {
        // X X X
        // X O O
        // X O O   (final X move at 0 completes both lines)
        let shared = unchecked("XXXXOOXOO");
        assert!(shared.winning_lines_share_cell(Mark::X));
        assert!(shared.is_reachable());
    }

    #[test]
    fn test_invalid_double_win_without_shared_cell() {
        // X X X
        // O O .
        // X X X
        let board = unchecked("XXXOO.XXX");
        assert!(!board.winning_lines_share_cell(Mark::X));
        assert!(!board.is_reachable());
    }

    #[test]
    fn test_played_boards_stay_valid() {
        let mut board = initial_state();
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            board = board.apply(Move::from_index(index).unwrap()).unwrap();
            assert!(board.is_reachable(), "board became invalid:\n{board}");
            if board.is_terminal() {
                break;
            }
        }
    }
}
