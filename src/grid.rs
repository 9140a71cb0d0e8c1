use std::fmt;

use crate::board::{Cell, ConstraintBoard, Digit, DigitSet};
use crate::errors::{FromBytesError, LineParseError};
use crate::solver;

/// A 9×9 sudoku grid, stored in row-major order. `0` encodes an empty cell.
///
/// `Grid` is a plain value: it carries no constraint bookkeeping and cannot
/// be mutated from outside the crate. To fill cells, build a
/// [`ConstraintBoard`] from it and go through
/// [`place`](ConstraintBoard::place)/[`erase`](ConstraintBoard::erase).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Grid(pub(crate) [u8; 81]);

impl Grid {
    /// The grid with every cell empty.
    pub fn empty() -> Self {
        Grid([0; 81])
    }

    /// Constructs a grid from 81 bytes in row-major order.
    /// Fails if any entry is greater than 9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Self, FromBytesError> {
        if bytes.iter().any(|&num| num > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Grid(bytes))
    }

    /// Constructs a grid from a matrix of rows.
    /// Fails if any entry is greater than 9.
    pub fn from_matrix(matrix: [[u8; 9]; 9]) -> Result<Self, FromBytesError> {
        let mut bytes = [0; 81];
        for (row, contents) in matrix.iter().enumerate() {
            bytes[row * 9..row * 9 + 9].copy_from_slice(contents);
        }
        Self::from_bytes(bytes)
    }

    /// Parses a grid from 81 characters. `'1'..='9'` are clues; `'.'`, `'_'`
    /// and `'0'` denote empty cells.
    pub fn from_str_line(s: &str) -> Result<Self, LineParseError> {
        let mut bytes = [0; 81];
        let mut len = 0;
        for (i, ch) in s.chars().enumerate() {
            if i >= 81 {
                return Err(LineParseError::InvalidLength(s.chars().count()));
            }
            bytes[i] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '_' | '0' => 0,
                _ => return Err(LineParseError::InvalidEntry { cell: i as u8, ch }),
            };
            len = i + 1;
        }
        if len != 81 {
            return Err(LineParseError::InvalidLength(len));
        }
        Ok(Grid(bytes))
    }

    /// Returns the cell contents as bytes, `0` for empty, row-major.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the cell contents as a matrix of rows.
    pub fn to_matrix(self) -> [[u8; 9]; 9] {
        let mut matrix = [[0; 9]; 9];
        for (row, contents) in matrix.iter_mut().enumerate() {
            contents.copy_from_slice(&self.0[row * 9..row * 9 + 9]);
        }
        matrix
    }

    /// Prints the grid as 81 characters on one line, `'.'` for empty cells.
    pub fn to_str_line(self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (num + b'0') as char,
            })
            .collect()
    }

    /// The digit in the given cell, or `None` if it is empty.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    pub(crate) fn set(&mut self, cell: Cell, num: u8) {
        self.0[cell.as_index()] = num;
    }

    /// Number of filled cells.
    pub fn n_clues(&self) -> usize {
        self.0.iter().filter(|&&num| num != 0).count()
    }

    /// Returns true, if every cell is filled and every row, column and block
    /// contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        let mut rows = [DigitSet::NONE; 9];
        let mut cols = [DigitSet::NONE; 9];
        let mut blocks = [DigitSet::NONE; 9];
        for cell in Cell::all() {
            let digit = match self.digit(cell) {
                Some(digit) => digit,
                None => return false,
            };
            let seen = rows[cell.row() as usize]
                | cols[cell.col() as usize]
                | blocks[cell.block() as usize];
            if seen.contains(digit) {
                return false;
            }
            rows[cell.row() as usize].insert(digit);
            cols[cell.col() as usize].insert(digit);
            blocks[cell.block() as usize].insert(digit);
        }
        true
    }

    /// Finds a solution to this grid, if one exists.
    ///
    /// Returns `None` both for conflicting clues and for unsolvable grids.
    /// If multiple solutions exist, an arbitrary one is returned; use
    /// [`solve_unique`](Self::solve_unique) to insist on uniqueness.
    pub fn solve_one(self) -> Option<Grid> {
        let mut board = ConstraintBoard::from_grid(self).ok()?;
        solver::solve_in_place(&mut board).ok()?;
        Some(board.into_grid())
    }

    /// Finds the solution to this grid, if exactly one exists.
    pub fn solve_unique(self) -> Option<Grid> {
        let mut solutions = self.solve_at_most(2);
        match solutions.len() {
            1 => solutions.pop(),
            _ => None,
        }
    }

    /// Finds up to `limit` solutions to this grid. Returns an empty `Vec`
    /// for conflicting clues or unsolvable grids.
    ///
    /// No specific ordering of solutions is promised.
    pub fn solve_at_most(self, limit: usize) -> Vec<Grid> {
        let mut board = match ConstraintBoard::from_grid(self) {
            Ok(board) => board,
            Err(_) => return Vec::new(),
        };
        let solutions = solver::enumerate_solutions(&mut board).take(limit).collect();
        solutions
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &num) in self.0.iter().enumerate() {
            let (row, col) = (i / 9, i % 9);
            match (row, col) {
                (_, 3) | (_, 6) => write!(f, " ")?, // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) if row != 0 => writeln!(f)?,
                _ => {}
            }
            match num {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_str_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_roundtrip() {
        let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
        let grid = Grid::from_str_line(line).unwrap();
        assert_eq!(grid.to_str_line(), line);
        assert_eq!(grid.n_clues(), line.chars().filter(char::is_ascii_digit).count());
    }

    #[test]
    fn line_placeholders_equivalent() {
        let dots = Grid::from_str_line(&".".repeat(81)).unwrap();
        let zeros = Grid::from_str_line(&"0".repeat(81)).unwrap();
        let underscores = Grid::from_str_line(&"_".repeat(81)).unwrap();
        assert_eq!(dots, Grid::empty());
        assert_eq!(zeros, Grid::empty());
        assert_eq!(underscores, Grid::empty());
    }

    #[test]
    fn line_length_checked() {
        assert_eq!(
            Grid::from_str_line(&".".repeat(80)),
            Err(LineParseError::InvalidLength(80))
        );
        assert_eq!(
            Grid::from_str_line(&".".repeat(82)),
            Err(LineParseError::InvalidLength(82))
        );
    }

    #[test]
    fn line_rejects_garbage() {
        let mut line = ".".repeat(81);
        line.replace_range(10..11, "x");
        assert_eq!(
            Grid::from_str_line(&line),
            Err(LineParseError::InvalidEntry { cell: 10, ch: 'x' })
        );
    }

    #[test]
    fn bytes_reject_out_of_range() {
        let mut bytes = [0; 81];
        bytes[40] = 10;
        assert!(Grid::from_bytes(bytes).is_err());
    }

    #[test]
    fn matrix_roundtrip() {
        let mut matrix = [[0; 9]; 9];
        matrix[0][0] = 1;
        matrix[8][8] = 9;
        let grid = Grid::from_matrix(matrix).unwrap();
        assert_eq!(grid.digit(Cell::from_row_col(0, 0)), Some(Digit::new(1)));
        assert_eq!(grid.digit(Cell::from_row_col(8, 8)), Some(Digit::new(9)));
        assert_eq!(grid.to_matrix(), matrix);
    }

    #[test]
    fn empty_grid_is_not_solved() {
        assert!(!Grid::empty().is_solved());
    }

    #[test]
    fn duplicate_in_row_is_not_solved() {
        // a fully filled grid where each row repeats the same pattern:
        // valid rows, invalid columns and blocks
        let mut bytes = [0; 81];
        for (i, entry) in bytes.iter_mut().enumerate() {
            *entry = (i % 9) as u8 + 1;
        }
        let grid = Grid::from_bytes(bytes).unwrap();
        assert!(!grid.is_solved());
    }
}
