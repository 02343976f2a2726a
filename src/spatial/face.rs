//! Mosaic face records consumed from the color quantizer

use crate::spatial::palette::PaletteColor;

/// One colored tile of a mosaic face
///
/// `x` and `y` are tile-grid coordinates across the whole mosaic, not pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Tile column
    pub x: i32,
    /// Tile row
    pub y: i32,
    /// Quantized tile color
    pub color: PaletteColor,
}

impl Tile {
    /// Create a tile at grid position (`x`, `y`)
    pub const fn new(x: i32, y: i32, color: PaletteColor) -> Self {
        Self { x, y, color }
    }
}

/// Nine tiles shown on the front of one mosaic cube, in row-major order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    /// Row-major tiles; index 4 is the center
    pub tiles: [Tile; 9],
}

impl Face {
    /// Build the face whose top-left tile sits at grid position (`x`, `y`)
    pub fn from_colors(x: i32, y: i32, colors: [PaletteColor; 9]) -> Self {
        let mut index = 0;
        let tiles = colors.map(|color| {
            let (row, col) = (index / 3, index % 3);
            index += 1;
            Tile::new(x + col, y + row, color)
        });
        Self { tiles }
    }

    /// Face where every tile shares one color
    pub fn uniform(x: i32, y: i32, color: PaletteColor) -> Self {
        Self::from_colors(x, y, [color; 9])
    }

    /// Center tile of the face
    pub const fn center(&self) -> Tile {
        self.tiles[4]
    }
}

/// Pixel geometry of the whole mosaic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicLayout {
    /// Edge length of one tile in pixels
    pub tile_size: u32,
    /// Mosaic width in pixels
    pub width: u32,
    /// Mosaic height in pixels
    pub height: u32,
}

impl MosaicLayout {
    /// Create a layout
    pub const fn new(tile_size: u32, width: u32, height: u32) -> Self {
        Self {
            tile_size,
            width,
            height,
        }
    }

    /// Tile columns covered by the mosaic
    pub const fn columns(&self) -> usize {
        if self.tile_size == 0 {
            0
        } else {
            (self.width / self.tile_size) as usize
        }
    }

    /// Tile rows covered by the mosaic
    pub const fn rows(&self) -> usize {
        if self.tile_size == 0 {
            0
        } else {
            (self.height / self.tile_size) as usize
        }
    }

    /// Geometric center of the mosaic in pixels
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Distance from the center to a corner in pixels
    pub fn max_distance_from_center(&self) -> f64 {
        let (cx, cy) = self.center();
        cx.hypot(cy)
    }

    /// Pixel-space center of the tile at grid position (`x`, `y`)
    pub fn tile_center(&self, x: i32, y: i32) -> (f64, f64) {
        let size = f64::from(self.tile_size);
        ((f64::from(x) + 0.5) * size, (f64::from(y) + 0.5) * size)
    }
}
