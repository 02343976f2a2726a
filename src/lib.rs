//! Cube mosaic engine: bitmaps rendered as grids of miniature cubes that
//! scramble and then rotate back into the picture
//!
//! Each mosaic cube is 27 cubies in a flat transform arena. Layers are found
//! from live cubie positions on every move, and every scramble is built as a
//! sequence followed by its inverse, so the reveal always lands on the image.

#![forbid(unsafe_code)]

/// Scramble generation, pre-roll, per-cube sequencing and the engine facade
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Geometry utilities for pivots and axis rotations
pub mod math;
/// Faces, palette, transform storage and layer membership
pub mod spatial;

pub use algorithm::{EngineConfig, MosaicEngine};
pub use io::error::{MosaicError, Result};
