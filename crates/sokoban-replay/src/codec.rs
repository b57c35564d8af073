//! Binary encode/decode for states and traces.
//!
//! All integers are little-endian. The formats carry no padding and no
//! self-describing schema.
//!
//! State layout:
//!
//! ```text
//! [MAGIC "SOKO"] [VERSION u8] [seed u64] [rows u32] [cols u32]
//! [agent u32] [hash u64] [reward u64]
//! [terrain_len u32] [terrain u8 * terrain_len]
//! [box_count u32] [box_cell u32 * box_count]
//! ```
//!
//! Trace layout:
//!
//! ```text
//! [MAGIC "SOKT"] [VERSION u8] [seed u64] [layout_hash u64]
//! ([step u64] [action u8] [hash u64] [reward u64])*
//! ```

use std::io::{Read, Write};
use std::sync::Arc;

use sokoban_board::{BoardModel, InitialPlacement};
use sokoban_core::{Action, CellIndex, RewardSignal, Terrain};
use sokoban_engine::SokobanState;
use sokoban_space::Grid;

use crate::error::CodecError;
use crate::types::{Frame, TraceHeader};
use crate::{FORMAT_VERSION, STATE_MAGIC, TRACE_MAGIC};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CodecError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, CodecError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_preamble(r: &mut dyn Read, expected: [u8; 4]) -> Result<(), CodecError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != expected {
        return Err(CodecError::InvalidMagic {
            expected,
            found: magic,
        });
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }
    Ok(())
}

fn malformed(detail: impl Into<String>) -> CodecError {
    CodecError::Malformed {
        detail: detail.into(),
    }
}

// ── State ───────────────────────────────────────────────────────

/// Encode a full state.
pub fn encode_state(w: &mut dyn Write, state: &SokobanState) -> Result<(), CodecError> {
    let board = state.board();
    w.write_all(&STATE_MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u64_le(w, board.seed())?;
    write_u32_le(w, board.rows())?;
    write_u32_le(w, board.cols())?;
    write_u32_le(w, state.agent_cell().0)?;
    write_u64_le(w, state.hash())?;
    write_u64_le(w, state.reward_signal().bits())?;

    let terrain = board.terrain_cells();
    write_u32_le(w, terrain.len() as u32)?;
    let bytes: Vec<u8> = terrain.iter().map(|t| t.code()).collect();
    w.write_all(&bytes)?;

    let boxes = state.box_cells();
    write_u32_le(w, boxes.len() as u32)?;
    for cell in boxes {
        write_u32_le(w, cell.0)?;
    }
    Ok(())
}

/// Decode a full state, regenerating the hash basis from the stored
/// seed.
///
/// The decoded position becomes the board's initial placement, so
/// [`SokobanState::reset`] returns to it.
pub fn decode_state(r: &mut dyn Read) -> Result<SokobanState, CodecError> {
    read_preamble(r, STATE_MAGIC)?;
    let seed = read_u64_le(r)?;
    let rows = read_u32_le(r)?;
    let cols = read_u32_le(r)?;
    let agent = CellIndex(read_u32_le(r)?);
    let recorded = read_u64_le(r)?;
    let reward = RewardSignal::from_bits(read_u64_le(r)?);

    let grid = Grid::new(rows, cols).map_err(|e| malformed(e.to_string()))?;
    let terrain_len = read_u32_le(r)? as usize;
    if terrain_len != grid.cell_count() {
        return Err(malformed(format!(
            "terrain covers {terrain_len} cells, grid has {}",
            grid.cell_count()
        )));
    }
    let mut raw = Vec::new();
    (&mut *r).take(terrain_len as u64).read_to_end(&mut raw)?;
    if raw.len() != terrain_len {
        return Err(malformed(format!(
            "truncated terrain: got {} of {terrain_len} bytes",
            raw.len()
        )));
    }
    let terrain = raw
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            Terrain::from_code(b).ok_or_else(|| malformed(format!("terrain code {b} at cell {i}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let box_count = read_u32_le(r)? as usize;
    if box_count > terrain_len {
        return Err(malformed(format!(
            "{box_count} boxes on a {terrain_len}-cell board"
        )));
    }
    let mut boxes = Vec::with_capacity(box_count);
    for _ in 0..box_count {
        boxes.push(CellIndex(read_u32_le(r)?));
    }

    let initial = InitialPlacement { agent, boxes };
    let board = BoardModel::from_parts(grid, terrain, initial, seed)
        .map_err(|e| malformed(e.to_string()))?;
    let state = SokobanState::restore(Arc::new(board), reward);
    if state.hash() != recorded {
        tracing::warn!(
            recorded,
            computed = state.hash(),
            seed,
            "decoded state hash does not match"
        );
        return Err(CodecError::HashMismatch {
            recorded,
            computed: state.hash(),
        });
    }
    Ok(state)
}

/// Encode `state` into a fresh byte vector.
///
/// # Examples
///
/// ```
/// use sokoban_engine::SokobanState;
/// use sokoban_core::Action;
/// use sokoban_replay::{deserialize, serialize};
///
/// let mut state = SokobanState::with_seed("2|3|1|1|1|0|2|3", 7).unwrap();
/// state.apply_action(Action::Right);
/// let bytes = serialize(&state);
/// let back = deserialize(&bytes).unwrap();
/// assert_eq!(back, state);
/// assert_eq!(back.hash(), state.hash());
/// assert_eq!(serialize(&back), bytes);
/// ```
pub fn serialize(state: &SokobanState) -> Vec<u8> {
    let mut buf = Vec::new();
    let written = encode_state(&mut buf, state);
    debug_assert!(written.is_ok(), "encoding into a Vec failed: {written:?}");
    buf
}

/// Decode a state from bytes produced by [`serialize`]. Trailing bytes
/// are rejected.
pub fn deserialize(bytes: &[u8]) -> Result<SokobanState, CodecError> {
    let mut cursor = bytes;
    let state = decode_state(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(malformed(format!("{} trailing bytes", cursor.len())));
    }
    Ok(state)
}

// ── Trace ───────────────────────────────────────────────────────

/// Encode a trace header.
pub fn encode_trace_header(w: &mut dyn Write, header: &TraceHeader) -> Result<(), CodecError> {
    w.write_all(&TRACE_MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u64_le(w, header.seed)?;
    write_u64_le(w, header.layout_hash)?;
    Ok(())
}

/// Decode and validate a trace header.
pub fn decode_trace_header(r: &mut dyn Read) -> Result<TraceHeader, CodecError> {
    read_preamble(r, TRACE_MAGIC)?;
    Ok(TraceHeader {
        seed: read_u64_le(r)?,
        layout_hash: read_u64_le(r)?,
    })
}

/// Encode one frame.
pub fn encode_frame(w: &mut dyn Write, frame: &Frame) -> Result<(), CodecError> {
    write_u64_le(w, frame.step)?;
    write_u8(w, frame.action.code())?;
    write_u64_le(w, frame.hash)?;
    write_u64_le(w, frame.reward.bits())?;
    Ok(())
}

/// Decode one frame, or `None` at a clean end of stream.
pub fn decode_frame(r: &mut dyn Read) -> Result<Option<Frame>, CodecError> {
    // Read the step header byte-by-byte to tell a clean end of stream
    // (zero bytes) from truncation (1-7 bytes).
    let mut step_buf = [0u8; 8];
    let mut filled = 0;
    while filled < 8 {
        match r.read(&mut step_buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(malformed(format!(
                    "truncated frame header: got {filled} of 8 bytes for step"
                )))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    }
    let step = u64::from_le_bytes(step_buf);
    let code = read_u8(r)?;
    let action =
        Action::try_from(code).map_err(|e| malformed(format!("step {step}: {e}")))?;
    Ok(Some(Frame {
        step,
        action,
        hash: read_u64_le(r)?,
        reward: RewardSignal::from_bits(read_u64_le(r)?),
    }))
}
