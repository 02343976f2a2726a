//! PNG loading into mosaic faces and PNG export of rendered views

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;

use crate::io::configuration::TILES_PER_FACE;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::face::{Face, MosaicLayout};
use crate::spatial::palette::PaletteColor;

/// Quantized image ready to hand to the engine
#[derive(Debug, Clone)]
pub struct QuantizedMosaic {
    /// One face per 3x3 block of tiles, in row-major block order
    pub faces: Vec<Face>,
    /// Pixel geometry of the cropped mosaic
    pub layout: MosaicLayout,
    /// Palette color of every tile (indexed by `row`, `col`)
    pub tiles: Array2<PaletteColor>,
}

/// Load a PNG and quantize it into mosaic faces
///
/// # Errors
///
/// Returns an error if the file cannot be decoded or is smaller than one
/// 3x3 block of tiles
pub fn load_mosaic(path: &Path, tile_size: u32) -> Result<QuantizedMosaic> {
    let img = image::open(path)
        .map_err(|e| MosaicError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    quantize(&img, tile_size)
}

// Mean RGB of the pixels covered by one tile
fn tile_average(img: &RgbaImage, col: u32, row: u32, tile_size: u32) -> [u8; 3] {
    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for y in row * tile_size..(row + 1) * tile_size {
        for x in col * tile_size..(col + 1) * tile_size {
            if let Some(Rgba([r, g, b, _])) = img.get_pixel_checked(x, y) {
                sum[0] += u64::from(*r);
                sum[1] += u64::from(*g);
                sum[2] += u64::from(*b);
                count += 1;
            }
        }
    }
    if count == 0 {
        return [0, 0, 0];
    }
    sum.map(|channel| (channel / count) as u8)
}

/// Quantize an image into whole 3x3 blocks of palette-colored tiles
///
/// Partial blocks at the right and bottom edges are cropped away.
///
/// # Errors
///
/// Returns an error if `tile_size` is zero or the image holds no complete block
pub fn quantize(img: &RgbaImage, tile_size: u32) -> Result<QuantizedMosaic> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"must be at least one pixel",
        ));
    }

    let columns = img.width() / tile_size / 3 * 3;
    let rows = img.height() / tile_size / 3 * 3;
    if columns == 0 || rows == 0 {
        return Err(MosaicError::InvalidSourceData {
            reason: format!(
                "{}x{} image is smaller than one 3x3 block of {tile_size}px tiles",
                img.width(),
                img.height()
            ),
        });
    }

    let tiles = Array2::from_shape_fn((rows as usize, columns as usize), |(row, col)| {
        PaletteColor::nearest(tile_average(img, col as u32, row as u32, tile_size))
    });

    let blocks_per_row = columns as usize / 3;
    let faces = tiles
        .exact_chunks((3, 3))
        .into_iter()
        .enumerate()
        .map(|(block, cells)| -> Result<Face> {
            let colors: [PaletteColor; TILES_PER_FACE] = cells
                .iter()
                .copied()
                .collect::<Vec<_>>()
                .try_into()
                .map_err(|cells: Vec<PaletteColor>| MosaicError::InvalidSourceData {
                    reason: format!("block {block} holds {} tiles", cells.len()),
                })?;
            let (block_row, block_col) = (block / blocks_per_row, block % blocks_per_row);
            Ok(Face::from_colors(
                (block_col * 3) as i32,
                (block_row * 3) as i32,
                colors,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuantizedMosaic {
        faces,
        layout: MosaicLayout::new(tile_size, columns * tile_size, rows * tile_size),
        tiles,
    })
}

/// Export a rendered view as a PNG, one `tile_size` square per cell
///
/// Empty cells are transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The view is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_view_as_png(
    view: &Array2<Option<PaletteColor>>,
    tile_size: u32,
    output_path: &Path,
) -> Result<()> {
    let (rows, columns) = view.dim();
    if rows == 0 || columns == 0 || tile_size == 0 {
        return Err(MosaicError::InvalidSourceData {
            reason: "Nothing to export: the rendered view is empty".to_string(),
        });
    }

    let width = columns as u32 * tile_size;
    let height = rows as u32 * tile_size;
    let img: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        let cell = (
            (y / tile_size) as usize,
            (x / tile_size) as usize,
        );
        view.get(cell)
            .copied()
            .flatten()
            .map_or(Rgba([0, 0, 0, 0]), |color| Rgba(color.rgba()))
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
