//! Error types shared across the Sokoban workspace.
//!
//! Parsing failures are reported as [`MalformedBoard`]; they are raised
//! only while constructing a board and never during a transition.
//! [`StateError`] covers the two lookups that can be handed bad input
//! after construction: box identities and raw action codes.

use std::error::Error;
use std::fmt;

use crate::id::BoxId;

/// Why a textual board encoding was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedBoard {
    /// The number of `|`-separated tokens is not `rows * cols + 2`.
    TokenCount {
        /// Token count implied by the declared dimensions.
        expected: usize,
        /// Token count actually present.
        found: usize,
    },
    /// A dimension token is not a positive integer.
    InvalidDimension {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending token.
        token: String,
    },
    /// The declared dimensions exceed the `u32` cell index space.
    GridTooLarge {
        /// Declared rows.
        rows: u32,
        /// Declared columns.
        cols: u32,
    },
    /// A cell token is not a valid element code.
    InvalidCode {
        /// Row-major cell position of the token.
        cell: usize,
        /// The offending token.
        token: String,
    },
    /// The board does not hold exactly one agent.
    AgentCount {
        /// Number of agent-bearing codes found.
        found: usize,
    },
    /// Box-bearing codes and goal-bearing codes do not balance.
    BoxGoalMismatch {
        /// Number of box-bearing codes.
        boxes: usize,
        /// Number of goal-bearing codes.
        goals: usize,
    },
    /// A terrain table does not cover the declared grid.
    TerrainLength {
        /// Cell count of the grid.
        expected: usize,
        /// Length of the terrain table.
        found: usize,
    },
    /// An agent or box placement lies off the grid, on a wall, or on top
    /// of another placement.
    InvalidPlacement {
        /// The offending cell index.
        cell: usize,
    },
}

impl fmt::Display for MalformedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenCount { expected, found } => {
                write!(f, "expected {expected} tokens, found {found}")
            }
            Self::InvalidDimension { name, token } => {
                write!(f, "{name} must be a positive integer, got '{token}'")
            }
            Self::GridTooLarge { rows, cols } => {
                write!(f, "{rows}x{cols} board exceeds the cell index space")
            }
            Self::InvalidCode { cell, token } => {
                write!(f, "unknown element code '{token}' at cell {cell}")
            }
            Self::AgentCount { found } => {
                write!(f, "expected exactly one agent, found {found}")
            }
            Self::BoxGoalMismatch { boxes, goals } => {
                write!(f, "{boxes} boxes do not match {goals} goals")
            }
            Self::TerrainLength { expected, found } => {
                write!(f, "terrain covers {found} cells, grid has {expected}")
            }
            Self::InvalidPlacement { cell } => {
                write!(f, "cell {cell} cannot hold the agent or a box")
            }
        }
    }
}

impl Error for MalformedBoard {}

/// Errors from queries against a constructed state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A box identity outside `0..box_count` was requested.
    UnknownBoxIdentity {
        /// The requested id.
        id: BoxId,
        /// Number of boxes on the board.
        box_count: usize,
    },
    /// A raw action code outside the four directions.
    InvalidAction {
        /// The rejected code.
        code: u8,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBoxIdentity { id, box_count } => {
                write!(f, "unknown box id {id} (board has {box_count} boxes)")
            }
            Self::InvalidAction { code } => write!(f, "invalid action code {code}"),
        }
    }
}

impl Error for StateError {}
