//! Strongly-typed identifiers for cells and boxes.

use std::fmt;

/// Row-major index of a cell on the board.
///
/// `CellIndex(n)` is the cell at row `n / cols`, column `n % cols`.
/// The board never holds more than `u32::MAX` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u32);

impl CellIndex {
    /// The index as a `usize`, for slice access.
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Stable identity of a box.
///
/// Boxes are numbered in the order they are met when scanning the board
/// string left-to-right, top-to-bottom. The identity never changes while
/// the box moves, but it carries no meaning for hashing or equality: two
/// states with boxes permuted over the same cells are the same state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub u32);

impl BoxId {
    /// The id as a `usize`, for slot access.
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BoxId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
