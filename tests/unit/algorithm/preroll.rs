//! Tests for the instant scramble at initialization

#[cfg(test)]
mod tests {
    use cubemosaic::algorithm::moves::{Direction, Move, ParamsMove};
    use cubemosaic::algorithm::preroll::apply_preroll;
    use cubemosaic::algorithm::sequencer::rotate_layer;
    use cubemosaic::math::geometry::Axis;
    use cubemosaic::spatial::face::Face;
    use cubemosaic::spatial::layer::Pivots;
    use cubemosaic::spatial::palette::PaletteColor;
    use cubemosaic::spatial::store::TransformStore;

    fn setup() -> cubemosaic::Result<(TransformStore, Pivots)> {
        let face = Face::uniform(0, 0, PaletteColor::White);
        let mut store = TransformStore::new(1);
        store.initialize_cube(0, &face)?;
        Ok((store, Pivots::from_face(&face)))
    }

    fn forward() -> Vec<Move> {
        vec![
            Move::new(Axis::X, 0, Direction::Positive),
            Move::new(Axis::Y, 1, Direction::Negative),
        ]
    }

    // Tests the first three moves are applied and progress advances
    #[test]
    fn test_preroll_applies_first_moves() -> cubemosaic::Result<()> {
        let (mut store, pivots) = setup()?;
        let mut params = ParamsMove::mirrored(forward());

        assert!(apply_preroll(&mut store, &pivots, 0, &mut params, 3)?);
        assert_eq!(params.current_move(), 3);

        let (mut expected, _) = setup()?;
        for turn in params.moves().iter().take(3) {
            rotate_layer(&mut expected, &pivots, 0, *turn, turn.angle())?;
        }
        for slot in 0..27 {
            let id = cubemosaic::spatial::CubieId::new(0, slot);
            assert!(store.get(id)?.abs_diff_eq(expected.get(id)?, 1e-12));
        }
        assert!(store.max_drift() > 0.5);
        Ok(())
    }

    // Tests a list shorter than the pre-roll is skipped entirely
    #[test]
    fn test_short_sequence_skipped() -> cubemosaic::Result<()> {
        let (mut store, pivots) = setup()?;
        let mut params = ParamsMove::mirrored(vec![Move::new(Axis::Z, 2, Direction::Positive)]);

        assert!(!apply_preroll(&mut store, &pivots, 0, &mut params, 3)?);
        assert_eq!(params.current_move(), 0);
        assert_eq!(params.moves_length(), 2);
        assert!(store.max_drift() < f64::EPSILON);
        Ok(())
    }

    // Tests a pre-roll of zero moves changes nothing
    #[test]
    fn test_zero_preroll() -> cubemosaic::Result<()> {
        let (mut store, pivots) = setup()?;
        let mut params = ParamsMove::mirrored(forward());

        assert!(apply_preroll(&mut store, &pivots, 0, &mut params, 0)?);
        assert_eq!(params.current_move(), 0);
        assert!(store.max_drift() < f64::EPSILON);
        Ok(())
    }
}
