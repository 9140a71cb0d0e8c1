//! Random puzzle generation.
//!
//! A puzzle is built in two stages: fill an empty board by randomized
//! backtracking, then carve clues back out of the solved grid one at a time,
//! keeping only removals that provably preserve solution uniqueness. If the
//! carving pass runs out of cells before hitting its removal target, the
//! whole attempt (fill + carve) is thrown away and restarted.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Cell, ConstraintBoard, Digit, DigitSet};
use crate::errors::RetriesExhausted;
use crate::grid::Grid;
use crate::solver;

/// How many clues are carved out of the solved grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// 41 to 45 cells removed.
    Easy,
    /// 46 to 50 cells removed.
    Medium,
    /// 51 to 55 cells removed.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Inclusive range of cells removed from the solved grid, out of 81.
    pub fn removal_range(self) -> RangeInclusive<u8> {
        match self {
            Difficulty::Easy => 41..=45,
            Difficulty::Medium => 46..=50,
            Difficulty::Hard => 51..=55,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// Error for [`Difficulty::from_str`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("unknown difficulty, expected easy, medium or hard")]
pub struct ParseDifficultyError;

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}

/// Upper bound on fill+carve attempts before giving up. A single attempt
/// succeeds with high probability, so hitting this means the rng is broken.
const MAX_ATTEMPTS: usize = 1000;

/// Generates a random fully solved grid using the thread-local rng.
pub fn generate_filled() -> Grid {
    generate_filled_with_rng(&mut rand::thread_rng())
}

/// Generates a random fully solved grid.
///
/// Chronological backtracking over all 81 cells in row-major order, with a
/// fresh shuffled digit order on every visit of a cell. Because the order is
/// reshuffled per visit, a per-cell table of already tried digits replaces
/// the solver's numeric-order cursor; the table accumulates across revisits
/// of a cell and is reset for cell `i + 1` whenever the search falls back
/// into cell `i`.
pub fn generate_filled_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut board = ConstraintBoard::empty();
    let mut tested = [DigitSet::NONE; 81];
    let mut order: Vec<Digit> = Digit::all().collect();

    let mut i = 0;
    while i < 81 {
        let cell = Cell::new(i as u8);
        order.shuffle(rng);

        if board.erase(cell).is_some() {
            // falling back into this cell: the search below it starts over
            tested[i + 1] = DigitSet::NONE;
        }

        let choice = order
            .iter()
            .copied()
            .find(|&digit| !tested[i].contains(digit) && board.can_place(digit, cell));
        match choice {
            Some(digit) => {
                board.place(digit, cell);
                tested[i].insert(digit);
                i += 1;
            }
            None => {
                // an empty board always has solutions, so cell 0 never
                // exhausts its digits
                debug_assert!(i > 0);
                i -= 1;
            }
        }
    }
    board.into_grid()
}

/// Generates a puzzle with a unique solution using the thread-local rng.
/// Returns the puzzle and its solution.
pub fn generate(difficulty: Difficulty) -> (Grid, Grid) {
    // the retry cap exists as a safety valve and is unreachable in practice
    generate_with_rng(difficulty, &mut rand::thread_rng()).unwrap()
}

/// Generates a puzzle with a unique solution from the given rng.
/// Returns the puzzle and its solution.
///
/// The removal target is drawn uniformly from the difficulty's range.
/// Attempts that fail to reach the target are discarded and retried;
/// [`RetriesExhausted`] is returned after 1000 failed attempts, which a
/// working rng never comes close to.
pub fn generate_with_rng<R: Rng + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<(Grid, Grid), RetriesExhausted> {
    for _ in 0..MAX_ATTEMPTS {
        if let Some(pair) = try_generate(difficulty, rng) {
            return Ok(pair);
        }
    }
    Err(RetriesExhausted(MAX_ATTEMPTS))
}

/// One fill+carve attempt. `None` if the removal target was not reached.
fn try_generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Option<(Grid, Grid)> {
    let solution = generate_filled_with_rng(rng);
    // a solved grid has no conflicts
    let mut board = ConstraintBoard::from_grid(solution).unwrap();

    let target = rng.gen_range(difficulty.removal_range());
    let mut removed = 0;

    let mut cells: Vec<Cell> = Cell::all().collect();
    cells.shuffle(rng);
    for cell in cells {
        if removed == target {
            break;
        }
        // each cell is visited exactly once, so it still holds its digit
        let current = board.grid().digit(cell).unwrap();

        // the digit is removable iff no other digit in this cell admits a
        // solution: any alternative that solves would become a second
        // solution of the carved puzzle
        let mut removable = true;
        for digit in Digit::all() {
            if digit == current || !board.can_place(digit, cell) {
                continue;
            }
            board.erase(cell);
            board.place(digit, cell);
            // existence check on a scratch board; a NoSolution here is the
            // expected signal that this alternative is unusable
            let mut scratch = ConstraintBoard::from_grid(*board.grid()).unwrap();
            let solvable = solver::solve_in_place(&mut scratch).is_ok();
            board.erase(cell);
            board.place(current, cell);
            if solvable {
                removable = false;
                break;
            }
        }
        if removable {
            board.erase(cell);
            removed += 1;
        }
    }

    if removed == target {
        Some((board.into_grid(), solution))
    } else {
        None
    }
}
