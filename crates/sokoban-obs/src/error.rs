//! Error type for observation and image extraction.

use std::error::Error;
use std::fmt;

use sokoban_core::CellFlags;

/// Errors from filling an observation tensor or image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObsError {
    /// The sprite sheet has no sprite for a cell's flag combination.
    MissingSprite {
        /// The unresolved combination.
        flags: CellFlags,
    },
    /// A sprite's byte length does not match the sheet's declared size.
    SpriteSizeMismatch {
        /// The combination whose sprite is malformed.
        flags: CellFlags,
        /// `height * width * 3`.
        expected: usize,
        /// Actual sprite length.
        found: usize,
    },
    /// A caller-provided buffer has the wrong length.
    BufferSizeMismatch {
        /// Required length.
        expected: usize,
        /// Provided length.
        found: usize,
    },
}

impl fmt::Display for ObsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSprite { flags } => write!(f, "no sprite for cell flags {flags}"),
            Self::SpriteSizeMismatch {
                flags,
                expected,
                found,
            } => write!(
                f,
                "sprite for {flags} has {found} bytes, sheet declares {expected}"
            ),
            Self::BufferSizeMismatch { expected, found } => {
                write!(f, "buffer holds {found} elements, need {expected}")
            }
        }
    }
}

impl Error for ObsError {}
