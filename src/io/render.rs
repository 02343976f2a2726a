//! Orthographic front view of the live cubie transforms
//!
//! The viewer looks down -Z. Each grid cell shows the front-most cubie whose
//! rounded position lands in it, colored by the face pointing most toward +Z.

use ndarray::Array2;

use crate::io::error::Result;
use crate::math::geometry::position_of;
use crate::spatial::palette::PaletteColor;
use crate::spatial::store::TransformStore;

/// Render every cube of `store` onto a `rows` x `columns` tile grid
///
/// # Errors
///
/// Propagates store lookup errors
pub fn render_front_view(
    store: &TransformStore,
    columns: usize,
    rows: usize,
) -> Result<Array2<Option<PaletteColor>>> {
    let mut view = Array2::from_elem((rows, columns), None);
    let mut depth = Array2::from_elem((rows, columns), f64::NEG_INFINITY);

    for cube in 0..store.cube_count() {
        for transform in store.cube(cube)? {
            let position = position_of(transform);
            let (col, row) = (position.x.round(), position.y.round());
            if col < 0.0 || row < 0.0 {
                continue;
            }
            let cell = (row as usize, col as usize);
            let (Some(nearest), Some(shown)) = (depth.get_mut(cell), view.get_mut(cell)) else {
                continue;
            };
            if position.z > *nearest {
                *nearest = position.z;
                *shown = Some(PaletteColor::facing_viewer(transform));
            }
        }
    }

    Ok(view)
}
