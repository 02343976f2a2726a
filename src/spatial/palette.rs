//! Six-color cube palette and the fixed orientation each color is shown with
//!
//! Every cubie is a full six-colored unit cube. Its base orientation turns the
//! face carrying the requested color toward the viewer (+Z).

use glam::{DMat4, DVec3};
use std::f64::consts::{FRAC_PI_2, PI};

/// One of the six sticker colors of a cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Local +Y face
    White,
    /// Local -Y face
    Yellow,
    /// Local +X face
    Red,
    /// Local -X face
    Orange,
    /// Local -Z face
    Blue,
    /// Local +Z face
    Green,
}

impl PaletteColor {
    /// All palette colors in index order
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Yellow,
        Self::Red,
        Self::Orange,
        Self::Blue,
        Self::Green,
    ];

    /// Display color as RGBA
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::White => [255, 255, 255, 255],
            Self::Yellow => [255, 213, 0, 255],
            Self::Red => [196, 30, 58, 255],
            Self::Orange => [255, 88, 0, 255],
            Self::Blue => [0, 81, 186, 255],
            Self::Green => [0, 158, 96, 255],
        }
    }

    /// Outward normal of this color's face in cubie-local space
    pub const fn local_normal(self) -> DVec3 {
        match self {
            Self::White => DVec3::Y,
            Self::Yellow => DVec3::NEG_Y,
            Self::Red => DVec3::X,
            Self::Orange => DVec3::NEG_X,
            Self::Blue => DVec3::NEG_Z,
            Self::Green => DVec3::Z,
        }
    }

    /// Rotation that points this color's face along +Z
    pub fn base_orientation(self) -> DMat4 {
        match self {
            Self::White => DMat4::from_rotation_x(FRAC_PI_2),
            Self::Yellow => DMat4::from_rotation_x(-FRAC_PI_2),
            Self::Red => DMat4::from_rotation_y(-FRAC_PI_2),
            Self::Orange => DMat4::from_rotation_y(FRAC_PI_2),
            Self::Blue => DMat4::from_rotation_y(PI),
            Self::Green => DMat4::IDENTITY,
        }
    }

    /// Palette color closest to `rgb` by squared Euclidean distance
    pub fn nearest(rgb: [u8; 3]) -> Self {
        let [red, green, blue] = rgb;
        let distance = |color: Self| {
            let [r, g, b, _] = color.rgba();
            [(r, red), (g, green), (b, blue)]
                .iter()
                .map(|&(palette, sample)| {
                    let d = i32::from(palette) - i32::from(sample);
                    d * d
                })
                .sum::<i32>()
        };

        Self::ALL
            .iter()
            .copied()
            .min_by_key(|&color| distance(color))
            .unwrap_or(Self::White)
    }

    /// Color whose face, after `transform`, points most directly along +Z
    pub fn facing_viewer(transform: &DMat4) -> Self {
        Self::ALL
            .iter()
            .copied()
            .max_by(|&a, &b| {
                let za = transform.transform_vector3(a.local_normal()).z;
                let zb = transform.transform_vector3(b.local_normal()).z;
                za.total_cmp(&zb)
            })
            .unwrap_or(Self::Green)
    }
}
