//! Core types for the Sokoban state engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: cell and
//! box identifiers, board element codes, the four agent actions, the
//! reward bitfield, the [`CellSet`] bitset, and the error enums raised
//! by parsing and box-identity lookups.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cells;
pub mod element;
pub mod error;
pub mod id;
pub mod reward;

pub use action::Action;
pub use cells::{CellSet, CellSetIter};
pub use element::{CellFlags, Element, HashKind, Terrain};
pub use error::{MalformedBoard, StateError};
pub use id::{BoxId, CellIndex};
pub use reward::RewardSignal;
