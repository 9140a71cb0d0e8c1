//! A space-efficient set of digits.
//!
//! The constraint indexes of a board record which digits already occur in
//! each row, column and block. A `u16` bitmask is enough for the 9 digits
//! and keeps the membership test a single mask operation.

use std::ops::{BitOr, BitOrAssign};

use crate::board::Digit;

/// Set of sudoku digits, stored as a bitmask.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub(crate) struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// Returns true, if the digit is in the set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.as_index()) != 0
    }

    /// Adds the digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.as_index();
    }

    /// Removes the digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.as_index());
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        DigitSet(self.0 | other.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove() {
        let mut set = DigitSet::NONE;
        for digit in Digit::all() {
            assert!(!set.contains(digit));
            set.insert(digit);
            assert!(set.contains(digit));
        }
        set.remove(Digit::new(5));
        assert!(!set.contains(Digit::new(5)));
        assert!(set.contains(Digit::new(4)));
        assert!(set.contains(Digit::new(6)));
    }

    #[test]
    fn union() {
        let mut low = DigitSet::NONE;
        low.insert(Digit::new(1));
        let mut high = DigitSet::NONE;
        high.insert(Digit::new(9));
        let both = low | high;
        assert!(both.contains(Digit::new(1)));
        assert!(both.contains(Digit::new(9)));
        assert!(!both.contains(Digit::new(5)));
    }
}
