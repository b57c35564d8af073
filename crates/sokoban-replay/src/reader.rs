//! Action-trace playback.
//!
//! [`TraceReader`] reads frames from any `Read` source. The header is
//! validated on construction.

use std::io::Read;

use crate::codec::{decode_frame, decode_trace_header};
use crate::error::CodecError;
use crate::types::{Frame, TraceHeader};

/// Reads a trace from a byte stream.
pub struct TraceReader<R: Read> {
    reader: R,
    header: TraceHeader,
    frames_read: u64,
}

impl<R: Read> TraceReader<R> {
    /// Open a trace, reading and validating the header.
    pub fn open(mut reader: R) -> Result<Self, CodecError> {
        let header = decode_trace_header(&mut reader)?;
        Ok(Self {
            reader,
            header,
            frames_read: 0,
        })
    }

    /// The trace header.
    pub fn header(&self) -> &TraceHeader {
        &self.header
    }

    /// Read the next frame, or `None` if the stream is exhausted.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, CodecError> {
        let frame = decode_frame(&mut self.reader)?;
        if frame.is_some() {
            self.frames_read += 1;
        }
        Ok(frame)
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Convert into a frame iterator.
    pub fn frames(self) -> FrameIter<R> {
        FrameIter {
            reader: self.reader,
            done: false,
        }
    }
}

/// Iterator over the remaining frames of a trace. Stops after the first
/// error.
pub struct FrameIter<R: Read> {
    reader: R,
    done: bool,
}

impl<R: Read> Iterator for FrameIter<R> {
    type Item = Result<Frame, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match decode_frame(&mut self.reader) {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
