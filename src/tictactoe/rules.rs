//! Turn order, move generation and terminal detection

use super::{
    board::{Board, CELL_COUNT, Cell, Mark, Move},
    lines::LineAnalyzer,
};
use crate::error::{Error, MoveRejection};

impl Board {
    /// Mark that moves next.
    ///
    /// O moves only when X has strictly more marks on the board; every other
    /// count (including the empty board) gives the turn to X.
    pub fn current_player(&self) -> Mark {
        if self.count(Cell::X) > self.count(Cell::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Every empty cell, in row-major order.
    ///
    /// Terminal boards still list their empty cells; callers check
    /// [`Board::is_terminal`] first.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells()
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .filter_map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place the current player's mark at `mv` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] when the cell is off the grid or
    /// already occupied. The original board is never modified.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move) -> Result<Board, Error> {
        let Some(index) = mv.index() else {
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
                reason: MoveRejection::OutOfBounds,
            });
        };

        if self.cells()[index] != Cell::Empty {
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
                reason: MoveRejection::Occupied,
            });
        }

        Ok(self.place(index, self.current_player()))
    }

    /// Child boards for every legal move, paired with the move.
    pub(crate) fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        let mark = self.current_player();
        (0..CELL_COUNT)
            .filter(move |&i| self.cells()[i] == Cell::Empty)
            .filter_map(move |i| Move::from_index(i).map(|mv| (mv, self.place(i, mark))))
    }

    /// Mark owning a complete line, if any
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::first_winner(self.cells())
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

/// Mark that moves next on `board`
pub fn current_player(board: &Board) -> Mark {
    board.current_player()
}

/// Empty cells of `board` in row-major order
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board.legal_moves()
}

/// New board with the current player's mark at `mv`
pub fn apply(board: &Board, mv: Move) -> Result<Board, Error> {
    board.apply(mv)
}

/// Mark owning a complete line on `board`, if any
pub fn winner(board: &Board) -> Option<Mark> {
    board.winner()
}

/// Whether `board` is won or full
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::initial_state;

    #[test]
    fn test_initial_player_and_moves() {
        let board = initial_state();
        assert_eq!(board.current_player(), Mark::X);
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.legal_moves()[0], Move::new(0, 0));
        assert_eq!(board.legal_moves()[8], Move::new(2, 2));
    }

    #[test]
    fn test_apply_move() {
        let board = initial_state();
        let next = board.apply(Move::new(1, 1)).unwrap();

        assert_eq!(next.get(1, 1), Some(Cell::X));
        assert_eq!(next.current_player(), Mark::O);
        assert_eq!(board, initial_state());
        assert_eq!(next.legal_moves().len(), 8);
        assert!(!next.legal_moves().contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_apply_occupied_cell() {
        let board = initial_state().apply(Move::new(0, 0)).unwrap();
        let before = board;

        let err = board.apply(Move::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                row: 0,
                col: 0,
                reason: MoveRejection::Occupied
            }
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let err = initial_state().apply(Move::new(0, 3)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                reason: MoveRejection::OutOfBounds,
                ..
            }
        ));
    }

    #[test]
    fn test_player_alternation() {
        let mut board = initial_state();
        assert_eq!(board.current_player(), Mark::X);

        board = board.apply(Move::new(0, 0)).unwrap();
        assert_eq!(board.current_player(), Mark::O);

        board = board.apply(Move::new(0, 1)).unwrap();
        assert_eq!(board.current_player(), Mark::X);

        board = board.apply(Move::new(0, 2)).unwrap();
        assert_eq!(board.current_player(), Mark::O);
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Mark::X));
    }

    #[test]
    fn test_win_detection_vertical() {
        // X O X
        // . O X
        // . O .
        let board = Board::from_string("XOX.OX.O.").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Mark::O));
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_terminal_board_still_lists_empty_cells() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(board.legal_moves().len(), 4);
    }

    #[test]
    fn test_successors_match_apply() {
        let board = Board::from_string("X...O....").unwrap();
        for (mv, child) in board.successors() {
            assert_eq!(board.apply(mv).unwrap(), child);
        }
        assert_eq!(board.successors().count(), 7);
    }

    #[test]
    fn test_free_functions_delegate() {
        let board = initial_state();
        assert_eq!(current_player(&board), Mark::X);
        assert_eq!(legal_moves(&board).len(), 9);
        assert!(!is_terminal(&board));
        assert_eq!(winner(&board), None);
        let next = apply(&board, Move::new(2, 2)).unwrap();
        assert_eq!(next.get(2, 2), Some(Cell::X));
    }
}
