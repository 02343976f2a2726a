//! Tests for PNG quantization into faces and view export

#[cfg(test)]
mod tests {
    use cubemosaic::MosaicError;
    use cubemosaic::io::image::{export_view_as_png, load_mosaic, quantize};
    use cubemosaic::spatial::palette::PaletteColor;
    use image::{ImageBuffer, Rgba, RgbaImage};
    use ndarray::Array2;

    // Left half red, right half near-blue
    fn split_image(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([200, 30, 60, 255])
            } else {
                Rgba([10, 80, 180, 255])
            }
        })
    }

    // Tests tiles are averaged and mapped to the nearest palette color
    #[test]
    fn test_quantize_single_block() -> cubemosaic::Result<()> {
        let mosaic = quantize(&split_image(6, 6), 2)?;

        assert_eq!(mosaic.faces.len(), 1);
        assert_eq!(mosaic.tiles.dim(), (3, 3));
        assert_eq!(mosaic.layout.width, 6);
        assert_eq!(mosaic.layout.height, 6);

        let face = &mosaic.faces[0];
        assert_eq!(face.tiles[0].color, PaletteColor::Red);
        assert_eq!(face.tiles[2].color, PaletteColor::Blue);
        assert_eq!((face.tiles[8].x, face.tiles[8].y), (2, 2));
        Ok(())
    }

    // Tests partial blocks are cropped and faces are ordered row-major
    #[test]
    fn test_quantize_crops_partial_blocks() -> cubemosaic::Result<()> {
        let mosaic = quantize(&split_image(14, 7), 2)?;

        assert_eq!(mosaic.tiles.dim(), (3, 6));
        assert_eq!(mosaic.faces.len(), 2);
        assert_eq!(mosaic.layout.width, 12);
        assert_eq!(mosaic.faces[1].tiles[0].x, 3);
        assert_eq!(mosaic.faces[1].tiles[0].y, 0);
        Ok(())
    }

    // Tests a 2x2 block grid keeps every tile in its own block and position
    #[test]
    fn test_quantize_block_grid() -> cubemosaic::Result<()> {
        // One pixel per tile, top three rows red, bottom three blue
        let img: RgbaImage = ImageBuffer::from_fn(6, 6, |_, y| {
            if y < 3 {
                Rgba([200, 30, 60, 255])
            } else {
                Rgba([10, 80, 180, 255])
            }
        });
        let mosaic = quantize(&img, 1)?;

        assert_eq!(mosaic.faces.len(), 4);
        let origins: Vec<_> = mosaic
            .faces
            .iter()
            .map(|face| (face.tiles[0].x, face.tiles[0].y))
            .collect();
        assert_eq!(origins, vec![(0, 0), (3, 0), (0, 3), (3, 3)]);

        for (index, face) in mosaic.faces.iter().enumerate() {
            let expected = if index < 2 {
                PaletteColor::Red
            } else {
                PaletteColor::Blue
            };
            assert!(face.tiles.iter().all(|tile| tile.color == expected));
            for tile in &face.tiles {
                assert_eq!(
                    mosaic.tiles[(tile.y as usize, tile.x as usize)],
                    tile.color
                );
            }
        }
        Ok(())
    }

    // Tests images too small for one block are rejected
    #[test]
    fn test_quantize_too_small() {
        assert!(matches!(
            quantize(&split_image(5, 9), 2),
            Err(MosaicError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            quantize(&split_image(6, 6), 0),
            Err(MosaicError::InvalidParameter { .. })
        ));
    }

    // Tests views round-trip through a PNG file
    #[test]
    fn test_export_and_load() -> cubemosaic::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("view.png");

        let mut view = Array2::from_elem((3, 6), Some(PaletteColor::Red));
        if let Some(cell) = view.get_mut((0, 5)) {
            *cell = None;
        }
        export_view_as_png(&view, 2, &path)?;

        let reloaded = image::open(&path)
            .map_err(|e| MosaicError::ImageLoad {
                path: path.clone(),
                source: e,
            })?
            .to_rgba8();
        assert_eq!(reloaded.dimensions(), (12, 6));
        assert_eq!(reloaded.get_pixel(11, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(reloaded.get_pixel(0, 0), &Rgba(PaletteColor::Red.rgba()));

        let mosaic = load_mosaic(&path, 2)?;
        assert_eq!(mosaic.faces.len(), 2);
        assert_eq!(mosaic.faces[0].tiles[4].color, PaletteColor::Red);
        Ok(())
    }

    // Tests empty views are not exported
    #[test]
    fn test_export_empty_view() -> cubemosaic::Result<()> {
        let dir = tempfile::tempdir()?;
        let view: Array2<Option<PaletteColor>> = Array2::from_elem((0, 0), None);
        assert!(export_view_as_png(&view, 2, &dir.path().join("empty.png")).is_err());
        Ok(())
    }

    // Tests missing files surface as load errors
    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_mosaic(std::path::Path::new("does/not/exist.png"), 2),
            Err(MosaicError::ImageLoad { .. })
        ));
    }
}
