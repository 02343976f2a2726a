//! Tests for front-view rendering of cubie transforms

#[cfg(test)]
mod tests {
    use cubemosaic::algorithm::moves::{Direction, Move};
    use cubemosaic::algorithm::sequencer::rotate_layer;
    use cubemosaic::io::render::render_front_view;
    use cubemosaic::math::geometry::{Axis, QUARTER_TURN};
    use cubemosaic::spatial::face::Face;
    use cubemosaic::spatial::layer::Pivots;
    use cubemosaic::spatial::palette::PaletteColor;
    use cubemosaic::spatial::store::TransformStore;

    // Tests an initialized mosaic renders its face colors
    #[test]
    fn test_render_initial_faces() -> cubemosaic::Result<()> {
        let mut colors = [PaletteColor::Yellow; 9];
        colors[4] = PaletteColor::Orange;
        let faces = [
            Face::from_colors(0, 0, colors),
            Face::uniform(3, 0, PaletteColor::Blue),
        ];
        let mut store = TransformStore::new(2);
        for (cube, face) in faces.iter().enumerate() {
            store.initialize_cube(cube, face)?;
        }

        let view = render_front_view(&store, 6, 3)?;
        assert_eq!(view.dim(), (3, 6));
        assert_eq!(view[(1, 1)], Some(PaletteColor::Orange));
        assert_eq!(view[(0, 0)], Some(PaletteColor::Yellow));
        assert_eq!(view[(2, 5)], Some(PaletteColor::Blue));
        Ok(())
    }

    // Tests a turned layer shows the faces it rotated into view
    #[test]
    fn test_render_after_turn() -> cubemosaic::Result<()> {
        let face = Face::uniform(0, 0, PaletteColor::Green);
        let mut store = TransformStore::new(1);
        store.initialize_cube(0, &face)?;
        let pivots = Pivots::from_face(&face);

        let turn = Move::new(Axis::X, 0, Direction::Positive);
        rotate_layer(&mut store, &pivots, 0, turn, QUARTER_TURN)?;

        let view = render_front_view(&store, 3, 3)?;
        assert_eq!(view[(0, 0)], Some(PaletteColor::White));
        assert_eq!(view[(2, 0)], Some(PaletteColor::White));
        assert_eq!(view[(1, 1)], Some(PaletteColor::Green));
        Ok(())
    }

    // Tests cells without any cubie stay empty and off-grid cubies are skipped
    #[test]
    fn test_render_empty_cells() -> cubemosaic::Result<()> {
        let mut store = TransformStore::new(1);
        store.initialize_cube(0, &Face::uniform(-1, 0, PaletteColor::White))?;

        let view = render_front_view(&store, 4, 4)?;
        assert_eq!(view[(0, 0)], Some(PaletteColor::White));
        assert_eq!(view[(0, 2)], None);
        assert_eq!(view[(3, 0)], None);
        Ok(())
    }
}
