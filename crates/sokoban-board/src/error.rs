//! Error type for board construction.

use std::error::Error;
use std::fmt;

use sokoban_core::MalformedBoard;

/// Errors that abort board construction.
///
/// Raised only while a board is being built; no partial board is ever
/// returned alongside one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The board encoding or its parts are malformed.
    Malformed(MalformedBoard),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "malformed board: {e}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
        }
    }
}

impl From<MalformedBoard> for BoardError {
    fn from(e: MalformedBoard) -> Self {
        Self::Malformed(e)
    }
}
