//! Static Sokoban board: parsing, Zobrist basis, goal reachability.
//!
//! A [`BoardModel`] is built once per board encoding and seed, then
//! shared read-only by every state of the episode. It owns:
//!
//! - the [`Grid`](sokoban_space::Grid) geometry and per-cell
//!   [`Terrain`](sokoban_core::Terrain);
//! - the [`HashBasis`] of Zobrist keys drawn from a ChaCha8 stream;
//! - the [`GoalReach`] tables used by deadlock detection;
//! - the [`InitialPlacement`] a state starts from and resets to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod parser;
pub mod reach;
pub mod zobrist;

pub use error::BoardError;
pub use model::BoardModel;
pub use parser::{parse_board, InitialPlacement, ParsedBoard};
pub use reach::GoalReach;
pub use zobrist::HashBasis;
