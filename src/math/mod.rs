//! Mathematical utilities for cubie transforms

/// Pivot translations and axis-aligned quarter-turn rotations
pub mod geometry;
