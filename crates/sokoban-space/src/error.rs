//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// The grid does not fit the `u32` cell index space.
    DimensionTooLarge {
        /// Number of rows requested.
        rows: u32,
        /// Number of columns requested.
        cols: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { rows, cols } => {
                write!(f, "{rows}x{cols} grid exceeds the u32 cell index space")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
