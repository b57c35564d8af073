//! State serialization and action-trace replay for Sokoban.
//!
//! - [`serialize`] / [`deserialize`] encode a full state as bytes. Only
//!   the hash seed is stored; the Zobrist basis is regenerated on decode
//!   and the stored hash is checked against it.
//! - [`TraceWriter`] records the action taken and the resulting hash at
//!   every step; [`TraceReader`] plays a trace back.
//! - [`replay_and_compare`] and [`verify_trace`] re-run a trace and
//!   report the first step whose hash or reward differs.
//!
//! All I/O uses a small hand-written little-endian codec; see
//! [`codec`] for the byte layouts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod error;
pub mod hash;
pub mod reader;
pub mod types;
pub mod writer;

pub use codec::{decode_state, deserialize, encode_state, serialize};
pub use compare::{replay_and_compare, verify_trace, Divergence};
pub use error::CodecError;
pub use hash::layout_hash;
pub use reader::{FrameIter, TraceReader};
pub use types::{Frame, TraceHeader};
pub use writer::TraceWriter;

/// Magic bytes at the start of a serialized state.
pub const STATE_MAGIC: [u8; 4] = *b"SOKO";

/// Magic bytes at the start of an action trace.
pub const TRACE_MAGIC: [u8; 4] = *b"SOKT";

/// Current binary format version, shared by states and traces.
pub const FORMAT_VERSION: u8 = 1;
