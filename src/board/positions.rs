//! Positions on the 9×9 grid.

/// One of the 81 cells of a sudoku, numbered from `0..81` in row-major order.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell`.
    ///
    /// # Panic
    /// Panics in debug mode, if the cell number is not below 81.
    pub fn new(cell: u8) -> Self {
        debug_assert!(cell < 81);
        Cell(cell)
    }

    /// Constructs a new `Cell`. Returns `None`, if the cell number is not below 81.
    pub fn new_checked(cell: u8) -> Option<Self> {
        if cell < 81 {
            Some(Cell(cell))
        } else {
            None
        }
    }

    /// Constructs the cell at the given row and column, both from `0..9`.
    ///
    /// # Panic
    /// Panics in debug mode, if row or column are not below 9.
    pub fn from_row_col(row: u8, col: u8) -> Self {
        debug_assert!(row < 9);
        debug_assert!(col < 9);
        Cell(row * 9 + col)
    }

    /// Row index from `0..9`, topmost row is 0.
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from `0..9`, leftmost column is 0.
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Index of the 3×3 block containing this cell, from `0..9`,
    /// numbered left to right, top to bottom.
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// Returns the cell number contained within.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the cell number as `usize`.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell::new)
    }
}
