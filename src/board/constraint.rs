use crate::board::set::DigitSet;
use crate::board::{Cell, Digit};
use crate::errors::InvalidBoard;
use crate::grid::Grid;

/// A sudoku grid together with constraint indexes for O(1) legality checks.
///
/// Next to the grid itself, the board keeps one [`DigitSet`](DigitSet) per
/// row, column and block, recording which digits already occur there, and the
/// list of empty cells in row-major order. The solvers and the generator walk
/// `empty_cells` by index, so the list fixes the search order.
///
/// All mutation goes through [`place`](Self::place) and
/// [`erase`](Self::erase), which keep grid and indexes in lock-step. The grid
/// is only handed out read-only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintBoard {
    grid: Grid,
    row_digits: [DigitSet; 9],
    col_digits: [DigitSet; 9],
    block_digits: [DigitSet; 9],
    empty_cells: Vec<Cell>,
}

impl ConstraintBoard {
    /// Constructs a board with no clues. Every cell is empty.
    pub fn empty() -> Self {
        ConstraintBoard {
            grid: Grid::empty(),
            row_digits: [DigitSet::NONE; 9],
            col_digits: [DigitSet::NONE; 9],
            block_digits: [DigitSet::NONE; 9],
            empty_cells: Cell::all().collect(),
        }
    }

    /// Constructs a board from the given clues.
    ///
    /// Fails with [`InvalidBoard`] if two clues conflict under sudoku rules,
    /// i.e. the same digit occurs twice in a row, column or block. The error
    /// names the first cell (in row-major order) whose digit was already
    /// present.
    pub fn from_grid(grid: Grid) -> Result<Self, InvalidBoard> {
        let mut board = Self::empty();
        board.empty_cells.clear();

        for cell in Cell::all() {
            match grid.digit(cell) {
                None => board.empty_cells.push(cell),
                Some(digit) => {
                    if !board.can_place(digit, cell) {
                        return Err(InvalidBoard { cell, digit });
                    }
                    board.place(digit, cell);
                }
            }
        }
        Ok(board)
    }

    /// Returns true, if the digit occurs nowhere in the cell's row, column or block.
    ///
    /// This answers "is this digit still unused around this cell", not "may
    /// this cell hold this digit right now": the target cell's own content is
    /// not considered. In particular, asking about the digit a cell already
    /// holds returns `false`, because that digit is recorded in all three
    /// indexes. Erase first when re-placing into an occupied cell.
    pub fn can_place(&self, digit: Digit, cell: Cell) -> bool {
        let used = self.row_digits[cell.row() as usize]
            | self.col_digits[cell.col() as usize]
            | self.block_digits[cell.block() as usize];
        !used.contains(digit)
    }

    /// Writes the digit into the cell and records it in the constraint indexes.
    ///
    /// The cell must be empty and [`can_place`](Self::can_place) must hold;
    /// violating either corrupts the indexes. Checked in debug mode only.
    pub fn place(&mut self, digit: Digit, cell: Cell) {
        debug_assert!(self.grid.digit(cell).is_none());
        debug_assert!(self.can_place(digit, cell));
        self.grid.set(cell, digit.get());
        self.row_digits[cell.row() as usize].insert(digit);
        self.col_digits[cell.col() as usize].insert(digit);
        self.block_digits[cell.block() as usize].insert(digit);
    }

    /// Clears the cell and removes its digit from the constraint indexes.
    ///
    /// Returns the digit that was erased, or `None` without effect if the
    /// cell was already empty.
    pub fn erase(&mut self, cell: Cell) -> Option<Digit> {
        let digit = self.grid.digit(cell)?;
        self.grid.set(cell, 0);
        self.row_digits[cell.row() as usize].remove(digit);
        self.col_digits[cell.col() as usize].remove(digit);
        self.block_digits[cell.block() as usize].remove(digit);
        Some(digit)
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the board and returns the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The cells that were empty at construction, in row-major order, minus
    /// any cells filled through [`place`](Self::place) bookkeeping done by
    /// callers via [`set_empty_cells`](Self::set_empty_cells).
    pub fn empty_cells(&self) -> &[Cell] {
        &self.empty_cells
    }

    /// Replaces the search order of the solvers.
    ///
    /// This is the one sanctioned bypass of the normal mutation path: callers
    /// resuming a search on a partially filled board may reorder or extend
    /// the list to control which cells are visited, and in what order. The
    /// list must only name cells that are currently empty.
    pub fn set_empty_cells(&mut self, cells: Vec<Cell>) {
        debug_assert!(cells.iter().all(|&cell| self.grid.digit(cell).is_none()));
        self.empty_cells = cells;
    }
}
