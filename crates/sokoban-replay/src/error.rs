//! Error types for state decoding and trace replay.

use std::fmt;
use std::io;

/// Errors that can occur while encoding, decoding, or replaying.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The data does not start with the expected magic bytes.
    InvalidMagic {
        /// Magic the decoder expected.
        expected: [u8; 4],
        /// Bytes actually found.
        found: [u8; 4],
    },
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the data.
        found: u8,
    },
    /// The data could not be decoded (truncated, corrupt, or describing an
    /// impossible board).
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The stored state hash disagrees with the hash recomputed from the
    /// decoded placement and seed.
    HashMismatch {
        /// Hash stored in the data.
        recorded: u64,
        /// Hash recomputed after decoding.
        computed: u64,
    },
    /// A trace was recorded on a different board layout.
    LayoutMismatch {
        /// Layout hash from the trace header.
        recorded: u64,
        /// Layout hash of the board being replayed.
        current: u64,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic { expected, found } => write!(
                f,
                "invalid magic bytes {:?} (expected {:?})",
                String::from_utf8_lossy(found),
                String::from_utf8_lossy(expected)
            ),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed data: {detail}"),
            Self::HashMismatch { recorded, computed } => write!(
                f,
                "state hash mismatch: recorded={recorded:#018x}, computed={computed:#018x}"
            ),
            Self::LayoutMismatch { recorded, current } => write!(
                f,
                "board layout mismatch: recorded={recorded:#018x}, current={current:#018x}"
            ),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
