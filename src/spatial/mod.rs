//! Spatial data structures for cubies
//!
//! This module contains spatial-related functionality including:
//! - Mosaic faces, tiles and layout geometry
//! - The six-color palette and its cubie orientations
//! - The flat cubie transform arena
//! - Layer membership from live positions

/// Mosaic face records and pixel layout
pub mod face;
/// Layer membership resolution and pivots
pub mod layer;
/// Palette colors and their base orientations
pub mod palette;
/// Per-cubie transform storage
pub mod store;

pub use store::{CubieId, TransformStore};
