//! Sprite-composited RGB images.
//!
//! Each cell is drawn as one fixed-size sprite chosen by the cell's
//! [`CellFlags`]. The output is a row-major `(height, width, 3)` byte
//! buffer with `height = rows * sprite_height` and
//! `width = cols * sprite_width`.

use indexmap::IndexMap;
use sokoban_core::CellFlags;
use sokoban_engine::SokobanState;

use crate::error::ObsError;

/// Bytes per pixel.
pub const CHANNELS: usize = 3;

/// Source of per-cell sprites.
///
/// Every sprite is `height * width * 3` RGB bytes, row-major.
pub trait SpriteSheet {
    /// `(height, width)` of every sprite in pixels.
    fn sprite_size(&self) -> (usize, usize);

    /// The sprite for a flag combination, if the sheet has one.
    fn sprite(&self, flags: CellFlags) -> Option<&[u8]>;
}

// ── PaletteSheet ───────────────────────────────────────────────────

/// Built-in sheet of solid colours: terrain fills the tile, and an agent
/// or box is drawn as an inset square on top of it.
#[derive(Clone, Debug)]
pub struct PaletteSheet {
    size: usize,
    sprites: IndexMap<CellFlags, Vec<u8>>,
}

type Rgb = [u8; 3];

const FLOOR: Rgb = [24, 24, 24];
const WALL: Rgb = [112, 112, 112];
const GOAL: Rgb = [56, 150, 72];
const BOX: Rgb = [176, 118, 48];
const AGENT: Rgb = [64, 112, 224];

impl PaletteSheet {
    /// A sheet of `size x size` sprites. Sizes below 1 are clamped to 1.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let tile = |background: Rgb, overlay: Option<Rgb>| {
            let inset = size / 4;
            let mut px = Vec::with_capacity(size * size * CHANNELS);
            for y in 0..size {
                for x in 0..size {
                    let inside = (inset..size - inset).contains(&y)
                        && (inset..size - inset).contains(&x);
                    let colour = match overlay {
                        Some(c) if inside => c,
                        _ => background,
                    };
                    px.extend_from_slice(&colour);
                }
            }
            px
        };
        let sprites = IndexMap::from([
            (CellFlags::EMPTY, tile(FLOOR, None)),
            (CellFlags::WALL, tile(WALL, None)),
            (CellFlags::GOAL, tile(GOAL, None)),
            (CellFlags::AGENT, tile(FLOOR, Some(AGENT))),
            (CellFlags::BOX, tile(FLOOR, Some(BOX))),
            (CellFlags::AGENT | CellFlags::GOAL, tile(GOAL, Some(AGENT))),
            (CellFlags::BOX | CellFlags::GOAL, tile(GOAL, Some(BOX))),
        ]);
        Self { size, sprites }
    }
}

impl Default for PaletteSheet {
    fn default() -> Self {
        Self::new(8)
    }
}

impl SpriteSheet for PaletteSheet {
    fn sprite_size(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn sprite(&self, flags: CellFlags) -> Option<&[u8]> {
        self.sprites.get(&flags).map(Vec::as_slice)
    }
}

// ── Rendering ──────────────────────────────────────────────────────

/// Shape `[height, width, 3]` of the image of `state` drawn with `sheet`.
pub fn image_shape(state: &SokobanState, sheet: &dyn SpriteSheet) -> [usize; 3] {
    let (h, w) = sheet.sprite_size();
    [
        state.rows() as usize * h,
        state.cols() as usize * w,
        CHANNELS,
    ]
}

/// Render `state` into a freshly allocated image.
pub fn to_image(state: &SokobanState, sheet: &dyn SpriteSheet) -> Result<Vec<u8>, ObsError> {
    let mut out = vec![0; image_shape(state, sheet).iter().product()];
    write_image(state, sheet, &mut out)?;
    Ok(out)
}

/// Render `state` into a caller-owned buffer of exactly
/// [`image_shape`] bytes.
pub fn write_image(
    state: &SokobanState,
    sheet: &dyn SpriteSheet,
    out: &mut [u8],
) -> Result<(), ObsError> {
    let [height, width, _] = image_shape(state, sheet);
    let expected = height * width * CHANNELS;
    if out.len() != expected {
        return Err(ObsError::BufferSizeMismatch {
            expected,
            found: out.len(),
        });
    }
    let (sh, sw) = sheet.sprite_size();
    let sprite_len = sh * sw * CHANNELS;
    let row_bytes = width * CHANNELS;
    let grid = state.board().grid();

    for cell in grid.cells() {
        let flags = state.cell_flags(cell);
        let sprite = sheet.sprite(flags).ok_or(ObsError::MissingSprite { flags })?;
        if sprite.len() != sprite_len {
            return Err(ObsError::SpriteSizeMismatch {
                flags,
                expected: sprite_len,
                found: sprite.len(),
            });
        }
        let (r, c) = grid.coord(cell);
        let top_left = r as usize * sh * row_bytes + c as usize * sw * CHANNELS;
        for (y, line) in sprite.chunks_exact(sw * CHANNELS).enumerate() {
            let start = top_left + y * row_bytes;
            out[start..start + line.len()].copy_from_slice(line);
        }
    }
    Ok(())
}
