//! Flat arena of per-cubie affine transforms
//!
//! Each mosaic cube owns 27 consecutive entries. Cubies are only ever named by
//! a `CubieId`; nothing holds a reference into the arena between ticks.

use glam::{DMat4, DVec3};

use crate::io::configuration::{CUBIES_PER_CUBE, TILES_PER_FACE};
use crate::io::error::{MosaicError, Result};
use crate::math::geometry::max_element_difference;
use crate::spatial::face::Face;

/// Address of one cubie: a mosaic cube and a slot within it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubieId {
    /// Index of the mosaic cube
    pub cube: usize,
    /// Slot in `0..27`
    pub slot: usize,
}

impl CubieId {
    /// Create a cubie id
    pub const fn new(cube: usize, slot: usize) -> Self {
        Self { cube, slot }
    }
}

/// Slot of the cubie showing tile `tile` at depth layer `depth` (both `0..`)
pub const fn slot_for(tile: usize, depth: usize) -> usize {
    depth * TILES_PER_FACE + tile
}

/// Owner of every cubie transform for every mosaic cube
#[derive(Debug, Clone, Default)]
pub struct TransformStore {
    transforms: Vec<DMat4>,
    initial: Vec<DMat4>,
    cube_count: usize,
}

impl TransformStore {
    /// Allocate identity transforms for `cube_count` cubes
    pub fn new(cube_count: usize) -> Self {
        let len = cube_count * CUBIES_PER_CUBE;
        Self {
            transforms: vec![DMat4::IDENTITY; len],
            initial: vec![DMat4::IDENTITY; len],
            cube_count,
        }
    }

    /// Number of mosaic cubes held
    pub const fn cube_count(&self) -> usize {
        self.cube_count
    }

    fn index(&self, id: CubieId) -> Result<usize> {
        if id.cube >= self.cube_count || id.slot >= CUBIES_PER_CUBE {
            return Err(MosaicError::CubieOutOfRange {
                cube: id.cube,
                slot: id.slot,
                cube_count: self.cube_count,
            });
        }
        Ok(id.cube * CUBIES_PER_CUBE + id.slot)
    }

    /// Place a cubie at `position` with orientation `rotation` and record it as its home pose
    ///
    /// # Errors
    ///
    /// Returns `CubieOutOfRange` if `id` is outside the store
    pub fn initialize(&mut self, id: CubieId, position: DVec3, rotation: DMat4) -> Result<()> {
        let index = self.index(id)?;
        let transform = DMat4::from_translation(position) * rotation;
        if let (Some(current), Some(home)) =
            (self.transforms.get_mut(index), self.initial.get_mut(index))
        {
            *current = transform;
            *home = transform;
        }
        Ok(())
    }

    /// Initialize all 27 cubies of `cube` from its face
    ///
    /// Every depth layer (z = -1, 0, 1) receives the same color pattern.
    ///
    /// # Errors
    ///
    /// Returns `CubieOutOfRange` if `cube` is outside the store
    pub fn initialize_cube(&mut self, cube: usize, face: &Face) -> Result<()> {
        for depth in 0..3 {
            for (tile_index, tile) in face.tiles.iter().enumerate() {
                let position = DVec3::new(
                    f64::from(tile.x),
                    f64::from(tile.y),
                    depth as f64 - 1.0,
                );
                self.initialize(
                    CubieId::new(cube, slot_for(tile_index, depth)),
                    position,
                    tile.color.base_orientation(),
                )?;
            }
        }
        Ok(())
    }

    /// Current transform of a cubie
    ///
    /// # Errors
    ///
    /// Returns `CubieOutOfRange` if `id` is outside the store
    pub fn get(&self, id: CubieId) -> Result<DMat4> {
        let index = self.index(id)?;
        Ok(self.transforms.get(index).copied().unwrap_or(DMat4::IDENTITY))
    }

    /// Overwrite the current transform of a cubie
    ///
    /// # Errors
    ///
    /// Returns `CubieOutOfRange` if `id` is outside the store
    pub fn set(&mut self, id: CubieId, transform: DMat4) -> Result<()> {
        let index = self.index(id)?;
        if let Some(current) = self.transforms.get_mut(index) {
            *current = transform;
        }
        Ok(())
    }

    /// Transform the cubie had when it was last initialized
    ///
    /// # Errors
    ///
    /// Returns `CubieOutOfRange` if `id` is outside the store
    pub fn initial(&self, id: CubieId) -> Result<DMat4> {
        let index = self.index(id)?;
        Ok(self.initial.get(index).copied().unwrap_or(DMat4::IDENTITY))
    }

    /// The 27 live transforms of `cube`, indexed by slot
    ///
    /// # Errors
    ///
    /// Returns `CubieOutOfRange` if `cube` is outside the store
    pub fn cube(&self, cube: usize) -> Result<&[DMat4]> {
        let start = self.index(CubieId::new(cube, 0))?;
        self.transforms
            .get(start..start + CUBIES_PER_CUBE)
            .ok_or(MosaicError::CubieOutOfRange {
                cube,
                slot: 0,
                cube_count: self.cube_count,
            })
    }

    /// Largest element-wise deviation of any cubie from its home pose
    pub fn max_drift(&self) -> f64 {
        self.transforms
            .iter()
            .zip(&self.initial)
            .map(|(current, home)| max_element_difference(current, home))
            .fold(0.0, f64::max)
    }
}
