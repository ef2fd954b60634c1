//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Cell, Mark, Move};

/// Winning line indices on the 3x3 board, in evaluation order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark owning the first complete line, scanning rows, columns, diagonals
    pub fn first_winner(cells: &[Cell; 9]) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = cells[a].to_mark()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some(mark)
        })
    }

    /// Check if a mark has three in a row
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Every complete line owned by `mark`
    pub fn winning_lines(cells: &[Cell; 9], mark: Mark) -> Vec<[usize; 3]> {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }

    /// Empty cells that would immediately complete a line for `mark`,
    /// in row-major order
    pub fn winning_moves(board: &Board, mark: Mark) -> Vec<Move> {
        let cells = board.cells();
        let mut positions: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, mark, line))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions.into_iter().filter_map(Move::from_index).collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], mark: Mark, line: &[usize; 3]) -> Option<usize> {
        let target = mark.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
