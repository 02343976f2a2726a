//! Layer membership resolved from live cubie positions
//!
//! Membership is recomputed on every call. Cubies are never grouped
//! persistently, so a layer is whatever currently sits in it.

use glam::{DMat4, DVec3};

use crate::io::configuration::LAYERS_PER_AXIS;
use crate::io::error::{Result, invalid_parameter};
use crate::math::geometry::{Axis, position_of};
use crate::spatial::face::Face;
use crate::spatial::store::TransformStore;

/// Per-layer reference points of one mosaic cube
///
/// Pivot `f` carries the x of column `f`, the y of row `f` and depth `f - 1`,
/// so its component along any axis is the coordinate of layer `f` on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pivots([DVec3; LAYERS_PER_AXIS]);

impl Pivots {
    /// Derive pivots from the first tile of each row and column of `face`
    pub fn from_face(face: &Face) -> Self {
        Self(std::array::from_fn(|layer| {
            let column_head = face.tiles.get(layer).map_or(0, |tile| tile.x);
            let row_head = face
                .tiles
                .get(layer * LAYERS_PER_AXIS)
                .map_or(0, |tile| tile.y);
            DVec3::new(
                f64::from(column_head),
                f64::from(row_head),
                layer as f64 - 1.0,
            )
        }))
    }

    /// Pivot of layer `face`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `face` is not 0, 1 or 2
    pub fn get(&self, face: usize) -> Result<DVec3> {
        self.0.get(face).copied().ok_or_else(|| {
            invalid_parameter("face", &face, &"layer index must be 0, 1 or 2")
        })
    }

    /// Point a layer of `axis` rotates around
    ///
    /// The middle pivot re-centered onto the layer along `axis`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `face` is not 0, 1 or 2
    pub fn layer_center(&self, axis: Axis, face: usize) -> Result<DVec3> {
        let layer = self.get(face)?;
        let middle = self.get(1)?;
        Ok(axis.with_component(middle, axis.component(layer)))
    }
}

/// Slots and transforms of the cubies currently in layer `face` of `axis`
///
/// A cubie belongs to the layer when its coordinate along `axis`, rounded to
/// the nearest integer, equals the rounded layer coordinate of the pivot. A
/// cubie that has drifted to an unexpected coordinate is left out.
///
/// # Errors
///
/// Returns `CubieOutOfRange` for an unknown cube and `InvalidParameter` for a
/// layer index outside `0..3`
pub fn members_of(
    store: &TransformStore,
    axis: Axis,
    cube: usize,
    face: usize,
    pivots: &Pivots,
) -> Result<Vec<(usize, DMat4)>> {
    let target = axis.component(pivots.get(face)?).round() as i64;

    Ok(store
        .cube(cube)?
        .iter()
        .enumerate()
        .filter(|(_, transform)| {
            axis.component(position_of(transform)).round() as i64 == target
        })
        .map(|(slot, transform)| (slot, *transform))
        .collect())
}
