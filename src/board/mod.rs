//! Types for cells, digits and the constraint-tracked board.

mod constraint;
mod digit;
mod positions;
mod set;

pub use self::{constraint::ConstraintBoard, digit::Digit, positions::Cell};

pub(crate) use self::set::DigitSet;
