//! 2D rectangular grid with 4-connected neighbourhood (N/E/S/W).

use crate::error::SpaceError;
use smallvec::SmallVec;
use sokoban_core::{Action, CellIndex};

/// A two-dimensional rectangular grid with absorbing edges.
///
/// Each cell has a row-major [`CellIndex`]; `(row, col)` satisfies
/// `0 <= row < rows` and `0 <= col < cols`. Neighbours are the four
/// cardinal directions. Edge cells simply have fewer neighbours: a step
/// off the board is rejected rather than clamped or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
}

impl Grid {
    /// Create a new grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if the cell count or either
    /// axis would overflow the index types.
    ///
    /// # Examples
    ///
    /// ```
    /// use sokoban_space::Grid;
    /// use sokoban_core::{Action, CellIndex};
    ///
    /// let grid = Grid::new(2, 3).unwrap();
    /// assert_eq!(grid.cell_count(), 6);
    ///
    /// // Corner cell 0 cannot step up or left.
    /// assert_eq!(grid.step(CellIndex(0), Action::Up), None);
    /// assert_eq!(grid.step(CellIndex(0), Action::Right), Some(CellIndex(1)));
    /// assert_eq!(grid.neighbours(CellIndex(0)).len(), 2);
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        let fits_axes = rows <= i32::MAX as u32 && cols <= i32::MAX as u32;
        if !fits_axes || rows.checked_mul(cols).is_none() {
            return Err(SpaceError::DimensionTooLarge { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `cell` lies on the grid.
    #[inline]
    pub fn contains(&self, cell: CellIndex) -> bool {
        cell.get() < self.cell_count()
    }

    /// Flat index of `(row, col)`, or `None` when off the grid.
    #[inline]
    pub fn index(&self, row: i64, col: i64) -> Option<CellIndex> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return None;
        }
        Some(CellIndex((row as u32) * self.cols + col as u32))
    }

    /// `(row, col)` of a cell.
    #[inline]
    pub fn coord(&self, cell: CellIndex) -> (u32, u32) {
        (cell.0 / self.cols, cell.0 % self.cols)
    }

    /// The cell one step from `cell` in direction `action`, or `None`
    /// when the step leaves the grid.
    #[inline]
    pub fn step(&self, cell: CellIndex, action: Action) -> Option<CellIndex> {
        let (row, col) = self.coord(cell);
        let (dc, dr) = action.offset();
        self.index(row as i64 + dr as i64, col as i64 + dc as i64)
    }

    /// The cell `n` steps from `cell` in direction `action`.
    pub fn step_n(&self, cell: CellIndex, action: Action, n: u32) -> Option<CellIndex> {
        let (row, col) = self.coord(cell);
        let (dc, dr) = action.offset();
        let n = n as i64;
        self.index(row as i64 + dr as i64 * n, col as i64 + dc as i64 * n)
    }

    /// The 4-connected neighbours of `cell`, tagged with the direction
    /// that reaches them, in [`Action::ALL`] order.
    pub fn neighbours(&self, cell: CellIndex) -> SmallVec<[(Action, CellIndex); 4]> {
        Action::ALL
            .iter()
            .filter_map(|&a| self.step(cell, a).map(|n| (a, n)))
            .collect()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        (0..self.rows * self.cols).map(CellIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(Grid::new(0, 3), Err(SpaceError::EmptyGrid));
        assert_eq!(Grid::new(3, 0), Err(SpaceError::EmptyGrid));
    }

    #[test]
    fn rejects_overflowing_cell_count() {
        assert!(matches!(
            Grid::new(1 << 20, 1 << 20),
            Err(SpaceError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn neighbours_interior() {
        let g = Grid::new(5, 5).unwrap();
        let centre = g.index(2, 2).unwrap();
        let n = g.neighbours(centre);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&(Action::Up, g.index(1, 2).unwrap())));
        assert!(n.contains(&(Action::Down, g.index(3, 2).unwrap())));
        assert!(n.contains(&(Action::Left, g.index(2, 1).unwrap())));
        assert!(n.contains(&(Action::Right, g.index(2, 3).unwrap())));
    }

    #[test]
    fn neighbours_corner_and_edge() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.neighbours(CellIndex(0)).len(), 2);
        assert_eq!(g.neighbours(g.index(0, 2).unwrap()).len(), 3);
        assert_eq!(g.neighbours(g.index(4, 4).unwrap()).len(), 2);
    }

    #[test]
    fn step_does_not_wrap_rows() {
        let g = Grid::new(3, 4).unwrap();
        let end_of_row = g.index(0, 3).unwrap();
        assert_eq!(g.step(end_of_row, Action::Right), None);
        let start_of_row = g.index(1, 0).unwrap();
        assert_eq!(g.step(start_of_row, Action::Left), None);
    }

    #[test]
    fn step_n_matches_repeated_step() {
        let g = Grid::new(6, 6).unwrap();
        let c = g.index(1, 1).unwrap();
        let twice = g.step(c, Action::Down).and_then(|n| g.step(n, Action::Down));
        assert_eq!(g.step_n(c, Action::Down, 2), twice);
        assert_eq!(g.step_n(c, Action::Up, 2), None);
    }

    #[test]
    fn single_cell_grid() {
        let g = Grid::new(1, 1).unwrap();
        assert_eq!(g.cell_count(), 1);
        assert!(g.neighbours(CellIndex(0)).is_empty());
        assert_eq!(g.cells().collect::<Vec<_>>(), vec![CellIndex(0)]);
    }

    proptest! {
        #[test]
        fn coord_index_roundtrip(rows in 1u32..40, cols in 1u32..40, seed in any::<u32>()) {
            let g = Grid::new(rows, cols).unwrap();
            let cell = CellIndex(seed % (rows * cols));
            let (r, c) = g.coord(cell);
            prop_assert_eq!(g.index(r as i64, c as i64), Some(cell));
        }

        #[test]
        fn step_then_opposite_returns(rows in 1u32..20, cols in 1u32..20, seed in any::<u32>(), a in 0u8..4) {
            let g = Grid::new(rows, cols).unwrap();
            let cell = CellIndex(seed % (rows * cols));
            let action = Action::try_from(a).unwrap();
            if let Some(next) = g.step(cell, action) {
                prop_assert_eq!(g.step(next, action.opposite()), Some(cell));
            }
        }
    }
}
