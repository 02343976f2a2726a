//! Pivot translation pairs and axis-aligned rotation matrices
//!
//! Every layer rotation is expressed as `to_pivot * rotation * from_pivot`,
//! multiplied onto a cubie's existing world transform.

use glam::{DMat4, DVec3};
use std::f64::consts::FRAC_PI_2;

/// One full quarter turn in radians
pub const QUARTER_TURN: f64 = FRAC_PI_2;

/// Rotation axis of a layer turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rotation in the YZ plane
    X,
    /// Rotation in the XZ plane
    Y,
    /// Rotation in the XY plane
    Z,
}

impl Axis {
    /// All three axes in sampling order
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component of `v` along this axis
    pub const fn component(self, v: DVec3) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    /// Copy of `v` with the component along this axis replaced
    pub const fn with_component(self, v: DVec3, value: f64) -> DVec3 {
        match self {
            Self::X => DVec3::new(value, v.y, v.z),
            Self::Y => DVec3::new(v.x, value, v.z),
            Self::Z => DVec3::new(v.x, v.y, value),
        }
    }
}

/// Rotation matrix about `axis` through the origin
pub fn rotation_about(axis: Axis, angle: f64) -> DMat4 {
    match axis {
        Axis::X => DMat4::from_rotation_x(angle),
        Axis::Y => DMat4::from_rotation_y(angle),
        Axis::Z => DMat4::from_rotation_z(angle),
    }
}

/// Translate-to-pivot and translate-back pair for re-centering a layer
///
/// The first matrix moves the origin onto `pivot`, the second moves `pivot`
/// onto the origin.
pub fn pivot_pair(pivot: DVec3) -> (DMat4, DMat4) {
    (
        DMat4::from_translation(pivot),
        DMat4::from_translation(-pivot),
    )
}

/// Full rotation of `angle` radians about the line through `pivot` parallel to `axis`
pub fn layer_rotation(axis: Axis, pivot: DVec3, angle: f64) -> DMat4 {
    let (to_pivot, from_pivot) = pivot_pair(pivot);
    to_pivot * rotation_about(axis, angle) * from_pivot
}

/// World-space position encoded in an affine transform
pub fn position_of(transform: &DMat4) -> DVec3 {
    transform.w_axis.truncate()
}

/// Largest absolute element difference between two transforms
pub fn max_element_difference(a: &DMat4, b: &DMat4) -> f64 {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
