//! Numeric projections of a Sokoban state.
//!
//! - [`get_observation`] / [`write_observation`]: channel-major `f32`
//!   tensors in the [`Compact`](sokoban_engine::ObsDensity::Compact) or
//!   [`Expanded`](sokoban_engine::ObsDensity::Expanded) layout.
//! - [`to_image`] / [`write_image`]: RGB images composited from a
//!   [`SpriteSheet`]. [`PaletteSheet`] is a built-in sheet of solid
//!   colours for when no artwork is available.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod image;
pub mod tensor;

pub use error::ObsError;
pub use image::{image_shape, to_image, write_image, PaletteSheet, SpriteSheet};
pub use tensor::{get_observation, observation_len, observation_shape, write_observation};
