//! Backtracking search over the empty cells of a [`ConstraintBoard`].
//!
//! All three search variants share the same chronological backtracking
//! scheme: walk `empty_cells` by index, trial digits upward from a start
//! value, and on exhaustion step back to the previous cell to retry it with
//! a higher digit. Whether a cell is "fresh" or "revisited" is read off the
//! grid itself: a filled cell at the current index means we backtracked into
//! it, so it is erased and trials resume above the erased digit.

use crate::board::{Cell, ConstraintBoard, Digit};
use crate::errors::NoSolution;
use crate::grid::Grid;

/// Trial digits from `start` upward that are legal at `cell`, lowest first.
fn first_candidate(board: &ConstraintBoard, cell: Cell, start: u8) -> Option<Digit> {
    (start..=9)
        .map(Digit::new)
        .find(|&digit| board.can_place(digit, cell))
}

/// Fills all empty cells of the board in place.
///
/// On success the grid is completely and validly filled. The first solution
/// in the search order fixed by [`empty_cells`](ConstraintBoard::empty_cells)
/// is found; for multi-solution boards no other solution is looked at.
///
/// Fails with [`NoSolution`] if the empty cells cannot be filled; the board
/// is then back in its pre-call state, all trial placements undone.
pub fn solve_in_place(board: &mut ConstraintBoard) -> Result<(), NoSolution> {
    let n_empty = board.empty_cells().len();
    let mut i = 0;
    while i < n_empty {
        let cell = board.empty_cells()[i];
        // a filled cell here means we backtracked into it
        let start = match board.erase(cell) {
            None => 1,
            Some(prev) => prev.get() + 1,
        };
        match first_candidate(board, cell, start) {
            Some(digit) => {
                board.place(digit, cell);
                i += 1;
            }
            None => {
                if i == 0 {
                    return Err(NoSolution);
                }
                i -= 1;
            }
        }
    }
    Ok(())
}

/// One atomic action taken by the stepwise solver.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    /// The solver arrived at this cell and will trial digits there next.
    Select(Cell),
    /// The digit previously placed at the selected cell was erased
    /// before retrying higher digits.
    Erase,
    /// This digit was placed at the selected cell.
    Place(Digit),
}

#[derive(Copy, Clone)]
enum Phase {
    /// About to announce arrival at the current cell.
    Select,
    /// Arrival announced; erase a leftover digit or start trialing.
    Enter,
    /// Trialing digits from `start` upward.
    Trial { start: u8 },
    /// `NoSolution` was reported; the iterator is fused.
    Failed,
}

/// Suspendable variant of [`solve_in_place`], created by [`solve_stepwise`].
///
/// Yields one [`Step`] per call and performs no work in between, so the
/// consumer fully controls the pacing (one step per animation frame, say).
/// For every visit of a cell the events come as `Select`, then zero or one
/// `Erase`, then `Place`. The iterator ends after the board is solved;
/// an unsolvable board yields `Err(NoSolution)` once, then ends.
///
/// Dropping the iterator before it is exhausted leaves the board in
/// whatever partially solved state the search had reached.
pub struct StepwiseSolve<'a> {
    board: &'a mut ConstraintBoard,
    i: usize,
    phase: Phase,
}

/// Starts a stepwise solve of the board. See [`StepwiseSolve`].
pub fn solve_stepwise(board: &mut ConstraintBoard) -> StepwiseSolve<'_> {
    StepwiseSolve {
        board,
        i: 0,
        phase: Phase::Select,
    }
}

impl Iterator for StepwiseSolve<'_> {
    type Item = Result<Step, NoSolution>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Phase::Failed = self.phase {
                return None;
            }
            if self.i == self.board.empty_cells().len() {
                return None; // solved
            }
            let cell = self.board.empty_cells()[self.i];
            match self.phase {
                Phase::Select => {
                    self.phase = Phase::Enter;
                    return Some(Ok(Step::Select(cell)));
                }
                Phase::Enter => match self.board.erase(cell) {
                    Some(prev) => {
                        self.phase = Phase::Trial {
                            start: prev.get() + 1,
                        };
                        return Some(Ok(Step::Erase));
                    }
                    None => self.phase = Phase::Trial { start: 1 },
                },
                Phase::Trial { start } => match first_candidate(self.board, cell, start) {
                    Some(digit) => {
                        self.board.place(digit, cell);
                        self.i += 1;
                        self.phase = Phase::Select;
                        return Some(Ok(Step::Place(digit)));
                    }
                    None => {
                        if self.i == 0 {
                            self.phase = Phase::Failed;
                            return Some(Err(NoSolution));
                        }
                        self.i -= 1;
                        self.phase = Phase::Select;
                    }
                },
                Phase::Failed => unreachable!(),
            }
        }
    }
}

/// Lazy enumeration of every solution of a board, created by
/// [`enumerate_solutions`].
///
/// This is a single-pass, stateful walk tied to the live board: each yielded
/// [`Grid`] is a snapshot taken while the board itself keeps mutating. Run
/// to exhaustion, the walk erases everything it placed and the board ends up
/// back in its clue-only state. Stopping early is allowed but leaves the
/// board partially filled; callers wanting to reuse it afterwards must
/// rebuild a fresh [`ConstraintBoard`] from the original grid.
pub struct Solutions<'a> {
    board: &'a mut ConstraintBoard,
    i: usize,
    done: bool,
}

/// Starts enumerating all solutions of the board. See [`Solutions`].
pub fn enumerate_solutions(board: &mut ConstraintBoard) -> Solutions<'_> {
    Solutions {
        board,
        i: 0,
        done: false,
    }
}

impl Iterator for Solutions<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.done {
            return None;
        }
        let n_empty = self.board.empty_cells().len();
        loop {
            if self.i == n_empty {
                // every empty cell is filled: snapshot, then resume the
                // search at the last cell
                let snapshot = *self.board.grid();
                match self.i.checked_sub(1) {
                    Some(i) => self.i = i,
                    None => self.done = true, // board had no empty cells
                }
                return Some(snapshot);
            }
            let cell = self.board.empty_cells()[self.i];
            let start = match self.board.erase(cell) {
                None => 1,
                Some(prev) => prev.get() + 1,
            };
            match first_candidate(self.board, cell, start) {
                Some(digit) => {
                    self.board.place(digit, cell);
                    self.i += 1;
                }
                None => {
                    if self.i == 0 {
                        self.done = true;
                        return None;
                    }
                    self.i -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepwise_fills_first_row_in_order() {
        let mut board = ConstraintBoard::empty();
        let steps: Vec<_> = solve_stepwise(&mut board)
            .take(18)
            .map(Result::unwrap)
            .collect();

        // the first row of an empty grid fills 1..=9 without backtracking
        let mut expected = Vec::new();
        for col in 0..9 {
            expected.push(Step::Select(Cell::from_row_col(0, col)));
            expected.push(Step::Place(Digit::new(col + 1)));
        }
        assert_eq!(steps, expected);
    }

    #[test]
    fn stepwise_single_missing_cell() {
        let mut solved = ConstraintBoard::empty();
        solve_in_place(&mut solved).unwrap();
        let cell = Cell::from_row_col(5, 5);
        let mut grid = *solved.grid();
        let digit = grid.digit(cell).unwrap();
        grid.set(cell, 0);

        let mut board = ConstraintBoard::from_grid(grid).unwrap();
        let steps: Vec<_> = solve_stepwise(&mut board).map(Result::unwrap).collect();
        assert_eq!(steps, vec![Step::Select(cell), Step::Place(digit)]);
        assert_eq!(board.grid(), solved.grid());
    }

    #[test]
    fn stepwise_reports_no_solution_once() {
        // row 0 holds 1..=8 and the 9 sits in the same block as the open
        // cell, which therefore has no candidate at all
        let mut line = String::new();
        line.push_str("12345678.");
        line.push_str("......9..");
        line.push_str(&".".repeat(63));
        let grid = Grid::from_str_line(&line).unwrap();

        let mut board = ConstraintBoard::from_grid(grid).unwrap();
        let mut stepper = solve_stepwise(&mut board);
        let mut saw_error = false;
        for step in &mut stepper {
            if step == Err(NoSolution) {
                saw_error = true;
                break;
            }
        }
        assert!(saw_error);
        assert_eq!(stepper.next(), None);
    }
}
