//! Errors reported by board construction, the solvers and the generator.

use crate::board::{Cell, Digit};

/// Error for [`ConstraintBoard::from_grid`](crate::ConstraintBoard::from_grid):
/// two clues conflict under sudoku rules.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error(
    "digit {} at row {}, col {} is already present in its row, column or block",
    .digit.get(), .cell.row(), .cell.col()
)]
pub struct InvalidBoard {
    /// First cell (in row-major order) whose clue conflicts with an earlier one.
    pub cell: Cell,
    /// The conflicting digit.
    pub digit: Digit,
}

/// The search space is exhausted: no assignment of the empty cells satisfies
/// all sudoku constraints.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("sudoku has no solution")]
pub struct NoSolution;

/// Error for [`generate_with_rng`](crate::generate_with_rng): no generation
/// attempt reached the clue removal target within the attempt cap.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("no puzzle reached the clue removal target within {0} attempts")]
pub struct RetriesExhausted(pub usize);

/// Error for [`Grid::from_bytes`](crate::Grid::from_bytes) and
/// [`Grid::from_matrix`](crate::Grid::from_matrix).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("cell entries must be 0 for empty or a digit from 1..=9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_str_line`](crate::Grid::from_str_line).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// The string does not contain exactly 81 characters.
    #[error("line should have length 81, found {0}")]
    InvalidLength(usize),
    /// A character that is neither a digit nor an empty-cell placeholder.
    #[error("invalid character {ch:?} at cell {cell}")]
    InvalidEntry {
        /// Cell number from `0..=80`, row-major.
        cell: u8,
        /// The offending character.
        ch: char,
    },
}
