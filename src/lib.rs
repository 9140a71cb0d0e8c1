#![warn(missing_docs)]
//! A sudoku library built around a constraint-tracked board and one set of
//! backtracking primitives.
//!
//! ## Overview
//!
//! The [`ConstraintBoard`] owns a 9×9 [`Grid`] plus per-row, per-column and
//! per-block digit indexes, so placement legality is a single mask check.
//! Three search variants and the puzzle generator are all built on its
//! `can_place`/`place`/`erase` primitives:
//!
//! - [`solve_in_place`] fills a board with the first solution it finds,
//! - [`solve_stepwise`] yields the same search one [`Step`] at a time, for
//!   consumers that want to animate it,
//! - [`enumerate_solutions`] lazily walks every solution of a board,
//! - [`generate`] builds a random puzzle with a unique solution, together
//!   with that solution.
//!
//! ## Example
//!
//! ```
//! use sudoku_engine::{ConstraintBoard, Difficulty};
//!
//! let (puzzle, solution) = sudoku_engine::generate(Difficulty::Easy);
//! assert!(solution.is_solved());
//!
//! // generated puzzles have exactly one solution: solving the puzzle
//! // must reproduce the paired solution
//! let mut board = ConstraintBoard::from_grid(puzzle).unwrap();
//! sudoku_engine::solve_in_place(&mut board).unwrap();
//! assert_eq!(board.into_grid(), solution);
//!
//! // grids can also be parsed from and printed as 81-character lines
//! let grid = sudoku_engine::Grid::from_str_line(&puzzle.to_str_line()).unwrap();
//! assert_eq!(grid, puzzle);
//! ```

mod board;
mod errors;
mod generator;
mod grid;
mod solver;

pub use crate::board::{Cell, ConstraintBoard, Digit};
pub use crate::errors::{
    FromBytesError, InvalidBoard, LineParseError, NoSolution, RetriesExhausted,
};
pub use crate::generator::{
    generate, generate_filled, generate_filled_with_rng, generate_with_rng, Difficulty,
    ParseDifficultyError,
};
pub use crate::grid::Grid;
pub use crate::solver::{
    enumerate_solutions, solve_in_place, solve_stepwise, Solutions, Step, StepwiseSolve,
};
