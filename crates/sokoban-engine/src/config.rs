//! Game configuration, validation, and error types.
//!
//! [`GameConfig`] is the input for constructing a
//! [`SokobanState`](crate::SokobanState). [`validate()`](GameConfig::validate)
//! parses the board once so a bad encoding is caught before any state
//! exists.

use std::error::Error;
use std::fmt;

use sokoban_board::{parse_board, BoardError};

/// A small solvable board: one push right solves it.
pub const DEFAULT_BOARD: &str = "3|4|1|1|1|1|0|2|3|1|1|1|1|1";

// ── ObsDensity ─────────────────────────────────────────────────────

/// Channel layout of the observation tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ObsDensity {
    /// Four channels (agent, wall, box, goal); overlays set two channels.
    #[default]
    Compact,
    /// Seven channels, one per element code; exactly one set per cell.
    Expanded,
}

impl ObsDensity {
    /// Number of channels this density produces.
    pub fn channels(self) -> usize {
        match self {
            ObsDensity::Compact => 4,
            ObsDensity::Expanded => 7,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`GameConfig`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The board encoding failed to parse.
    Board(BoardError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "board: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
        }
    }
}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

// ── GameConfig ─────────────────────────────────────────────────────

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board in the `"<rows>|<cols>|<codes...>"` encoding.
    pub board: String,
    /// Seed for the Zobrist hash basis.
    pub seed: u64,
    /// Observation layout preferred by consumers of this game.
    pub density: ObsDensity,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: DEFAULT_BOARD.to_string(),
            seed: 0,
            density: ObsDensity::Compact,
        }
    }
}

impl GameConfig {
    /// Check the board encoding without building a state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_board(&self.board)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sokoban_core::MalformedBoard;

    #[test]
    fn default_config_validates() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn bad_board_is_reported() {
        let config = GameConfig {
            board: "2|2|0|0|4|4".into(),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Board(BoardError::Malformed(
                MalformedBoard::AgentCount { found: 2 }
            )))
        );
    }

    #[test]
    fn density_channels() {
        assert_eq!(ObsDensity::Compact.channels(), 4);
        assert_eq!(ObsDensity::Expanded.channels(), 7);
    }
}
