//! Rectangular grid geometry for Sokoban boards.
//!
//! [`Grid`] owns the dimensions of a board and answers every spatial
//! question the engine asks: flat index to `(row, col)` and back,
//! bounded single steps in an [`Action`](sokoban_core::Action)
//! direction, and the 4-connected neighbourhood. Cells outside the grid
//! are never produced; stepping off the edge yields `None`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::SpaceError;
pub use grid::Grid;
