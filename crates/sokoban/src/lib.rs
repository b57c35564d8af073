//! Sokoban: a compact state engine for search and reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Sokoban sub-crates. For most users, adding `sokoban` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sokoban::prelude::*;
//!
//! // 3x4 board: agent, box, goal in a walled corridor.
//! let mut state = SokobanState::new("3|4|1|1|1|1|0|2|3|1|1|1|1|1").unwrap();
//! assert!(!state.is_solution());
//!
//! state.apply_action(Action::Right);
//! assert!(state.is_solution());
//! assert!(state.reward_signal().contains(RewardSignal::BOX_IN_GOAL));
//!
//! // Observations are channel-major f32 planes.
//! let obs = get_observation(&state, ObsDensity::Compact);
//! assert_eq!(obs.len(), 4 * 3 * 4);
//!
//! // A full state round-trips through bytes.
//! let restored = deserialize(&serialize(&state)).unwrap();
//! assert_eq!(restored, state);
//! assert_eq!(restored.hash(), state.hash());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sokoban-core` | Actions, element codes, IDs, reward signal, errors |
//! | [`space`] | `sokoban-space` | Grid geometry and neighbourhoods |
//! | [`board`] | `sokoban-board` | Board parsing, hash basis, goal reachability |
//! | [`engine`] | `sokoban-engine` | State, transitions, deadlock rules |
//! | [`obs`] | `sokoban-obs` | Tensor observations and sprite images |
//! | [`replay`] | `sokoban-replay` | State serialization and trace replay |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`sokoban-core`).
///
/// Contains [`types::Action`], [`types::Element`], [`types::CellIndex`],
/// [`types::RewardSignal`] and the shared error types.
pub use sokoban_core as types;

/// Grid geometry (`sokoban-space`).
///
/// [`space::Grid`] maps flat cell indices to coordinates and answers
/// bounded step and neighbourhood queries.
pub use sokoban_space as space;

/// Immutable board data (`sokoban-board`).
///
/// [`board::BoardModel`] holds terrain, the Zobrist [`board::HashBasis`]
/// and the per-goal [`board::GoalReach`] tables. One model is shared by
/// every state on the same board.
pub use sokoban_board as board;

/// The state machine (`sokoban-engine`).
///
/// [`engine::SokobanState`] applies actions, tracks the incremental hash
/// and detects deadlocks via the rules in [`engine::deadlock`].
pub use sokoban_engine as engine;

/// Observation extraction (`sokoban-obs`).
///
/// Flat `f32` tensors via [`obs::get_observation`] and RGB images via
/// [`obs::to_image`].
pub use sokoban_obs as obs;

/// Serialization and replay (`sokoban-replay`).
///
/// Encode states with [`replay::serialize`], record action traces with
/// [`replay::TraceWriter`], and check determinism with
/// [`replay::verify_trace`].
pub use sokoban_replay as replay;

/// Common imports for typical Sokoban usage.
///
/// ```rust
/// use sokoban::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sokoban_core::{Action, BoxId, CellFlags, CellIndex, Element, RewardSignal};

    // Errors
    pub use sokoban_core::{MalformedBoard, StateError};
    pub use sokoban_board::BoardError;
    pub use sokoban_engine::ConfigError;
    pub use sokoban_obs::ObsError;
    pub use sokoban_replay::CodecError;

    // Board
    pub use sokoban_board::BoardModel;

    // Engine
    pub use sokoban_engine::{GameConfig, ObsDensity, SokobanState};

    // Observation
    pub use sokoban_obs::{get_observation, to_image, PaletteSheet, SpriteSheet};

    // Replay
    pub use sokoban_replay::{deserialize, serialize, TraceReader, TraceWriter};
}
