//! Action-trace recording.
//!
//! [`TraceWriter`] streams frames to any `Write` sink. The header is
//! written immediately on construction.

use std::io::Write;

use sokoban_core::Action;
use sokoban_engine::SokobanState;

use crate::codec::{encode_frame, encode_trace_header};
use crate::error::CodecError;
use crate::hash::layout_hash;
use crate::types::{Frame, TraceHeader};

/// Records the actions of one episode with the hash after each.
///
/// # Examples
///
/// ```
/// use sokoban_core::Action;
/// use sokoban_engine::SokobanState;
/// use sokoban_replay::{TraceReader, TraceWriter};
///
/// let mut state = SokobanState::with_seed("1|4|0|2|3|4", 3).unwrap();
/// let mut buf = Vec::new();
/// let mut writer = TraceWriter::new(&mut buf, &state).unwrap();
/// for action in [Action::Left, Action::Right] {
///     state.apply_action(action);
///     writer.record(action, &state).unwrap();
/// }
/// assert_eq!(writer.frames_written(), 2);
/// drop(writer);
///
/// let mut reader = TraceReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.header().seed, 3);
/// let second = reader.frames().nth(1).unwrap().unwrap();
/// assert_eq!(second.step, 2);
/// assert_eq!(second.hash, state.hash());
/// ```
pub struct TraceWriter<W: Write> {
    writer: W,
    frames_written: u64,
}

impl<W: Write> TraceWriter<W> {
    /// Start a trace for an episode on `state`'s board and seed.
    pub fn new(mut writer: W, state: &SokobanState) -> Result<Self, CodecError> {
        let header = TraceHeader {
            seed: state.seed(),
            layout_hash: layout_hash(state.board()),
        };
        encode_trace_header(&mut writer, &header)?;
        Ok(Self {
            writer,
            frames_written: 0,
        })
    }

    /// Record `action` and the state it produced.
    pub fn record(&mut self, action: Action, after: &SokobanState) -> Result<(), CodecError> {
        let frame = Frame {
            step: self.frames_written + 1,
            action,
            hash: after.hash(),
            reward: after.reward_signal(),
        };
        self.write_raw_frame(&frame)
    }

    /// Write a pre-built frame directly.
    pub fn write_raw_frame(&mut self, frame: &Frame) -> Result<(), CodecError> {
        encode_frame(&mut self.writer, frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
