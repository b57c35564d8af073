//! Sokoban state machine.
//!
//! [`SokobanState`] pairs a shared, immutable
//! [`BoardModel`](sokoban_board::BoardModel) with a small per-instance
//! [`LocalState`]. Actions are resolved by [`transition::apply_action`],
//! which keeps the Zobrist hash current with O(1) XOR updates per moved
//! entity. [`deadlock`] holds the individual deadlock rules used to prune
//! search.
//!
//! The engine is single-threaded and does no I/O. Boards are `Send +
//! Sync` and may be shared across threads; states are plain values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod deadlock;
pub mod game;
pub mod state;
pub mod transition;

pub use config::{ConfigError, GameConfig, ObsDensity, DEFAULT_BOARD};
pub use game::SokobanState;
pub use state::{BoxSet, LocalState};
