//! Tests for the per-cube animation state machine

#[cfg(test)]
mod tests {
    use cubemosaic::algorithm::moves::{Direction, Move, ParamsMove};
    use cubemosaic::algorithm::sequencer::{AnimationEvent, Sequencer, SequencerState};
    use cubemosaic::math::geometry::{Axis, QUARTER_TURN};
    use cubemosaic::spatial::face::Face;
    use cubemosaic::spatial::layer::Pivots;
    use cubemosaic::spatial::palette::PaletteColor;
    use cubemosaic::spatial::store::TransformStore;

    fn sequencer(forward: &[Vec<Move>], preroll: usize) -> cubemosaic::Result<Sequencer> {
        let faces: Vec<Face> = (0..forward.len())
            .map(|i| Face::uniform(3 * i as i32, 0, PaletteColor::Green))
            .collect();
        let mut store = TransformStore::new(faces.len());
        for (cube, face) in faces.iter().enumerate() {
            store.initialize_cube(cube, face)?;
        }
        let pivots = faces.iter().map(Pivots::from_face).collect();
        let params = forward
            .iter()
            .map(|moves| ParamsMove::mirrored(moves.clone()))
            .collect();
        Sequencer::prerolled(store, pivots, params, preroll)
    }

    fn one_turn() -> Vec<Move> {
        vec![Move::new(Axis::X, 1, Direction::Positive)]
    }

    // Tests an idle sequencer ignores ticks
    #[test]
    fn test_idle_ignores_ticks() -> cubemosaic::Result<()> {
        let mut idle = Sequencer::idle();
        assert_eq!(idle.state(), SequencerState::Idle);
        assert!(idle.tick(&[QUARTER_TURN])?.is_empty());
        assert_eq!(idle.state(), SequencerState::Idle);
        Ok(())
    }

    // Tests empty move lists start out finished and ignore ticks
    #[test]
    fn test_empty_lists_start_finished() -> cubemosaic::Result<()> {
        let mut seq = sequencer(&[Vec::new(), Vec::new()], 3)?;
        assert_eq!(seq.state(), SequencerState::Finished);
        assert!(seq.all_finished());
        assert!(seq.tick(&[QUARTER_TURN; 2])?.is_empty());
        Ok(())
    }

    // Tests the first tick starts the run
    #[test]
    fn test_first_tick_starts() -> cubemosaic::Result<()> {
        let mut seq = sequencer(&[one_turn()], 0)?;
        assert_eq!(seq.state(), SequencerState::PreRolled);

        let events = seq.tick(&[0.0])?;
        assert_eq!(events, vec![AnimationEvent::Started]);
        assert_eq!(seq.state(), SequencerState::Running);
        Ok(())
    }

    // Tests partial angles accumulate into one completed move
    #[test]
    fn test_partial_ticks_complete_move() -> cubemosaic::Result<()> {
        let mut seq = sequencer(&[one_turn()], 0)?;

        seq.tick(&[QUARTER_TURN / 4.0])?;
        assert_eq!(seq.params()[0].current_move(), 0);
        assert!((seq.applied()[0] - QUARTER_TURN / 4.0).abs() < 1e-12);

        let events = seq.tick(&[QUARTER_TURN * 0.75])?;
        assert_eq!(
            events,
            vec![AnimationEvent::MoveCompleted {
                cube: 0,
                move_index: 0
            }]
        );
        assert_eq!(seq.params()[0].current_move(), 1);
        assert!(seq.applied()[0].abs() < f64::EPSILON);
        Ok(())
    }

    // Tests excess angle is dropped so one tick completes at most one move
    #[test]
    fn test_excess_delta_dropped() -> cubemosaic::Result<()> {
        let mut seq = sequencer(&[one_turn()], 0)?;

        seq.tick(&[10.0 * QUARTER_TURN])?;
        assert_eq!(seq.params()[0].current_move(), 1);
        assert!(seq.applied()[0].abs() < f64::EPSILON);
        assert_eq!(seq.state(), SequencerState::Running);
        Ok(())
    }

    // Tests unusable deltas count as zero
    #[test]
    fn test_invalid_deltas_ignored() -> cubemosaic::Result<()> {
        let mut seq = sequencer(&[one_turn(), one_turn()], 0)?;

        seq.tick(&[-1.0, f64::NAN])?;
        seq.tick(&[f64::INFINITY])?;
        assert!(seq.store().max_drift() < f64::EPSILON);
        assert_eq!(seq.params()[0].current_move(), 0);
        assert_eq!(seq.params()[1].current_move(), 0);
        Ok(())
    }

    // Tests the run finishes once every cube has played every move
    #[test]
    fn test_finishes_and_restores() -> cubemosaic::Result<()> {
        let mut seq = sequencer(&[one_turn(), Vec::new()], 0)?;

        let first = seq.tick(&[QUARTER_TURN, QUARTER_TURN])?;
        assert!(!first.contains(&AnimationEvent::Finished));
        assert!(!seq.all_finished());

        let second = seq.tick(&[QUARTER_TURN, QUARTER_TURN])?;
        assert_eq!(second.last(), Some(&AnimationEvent::Finished));
        assert_eq!(seq.state(), SequencerState::Finished);
        assert!(seq.store().max_drift() < 1e-9);

        assert!(seq.tick(&[QUARTER_TURN, QUARTER_TURN])?.is_empty());
        Ok(())
    }

    // Tests pre-rolled cubes start mid-sequence
    #[test]
    fn test_prerolled_progress() -> cubemosaic::Result<()> {
        let forward = vec![
            Move::new(Axis::Z, 0, Direction::Negative),
            Move::new(Axis::Y, 2, Direction::Positive),
        ];
        let seq = sequencer(&[forward, one_turn()], 3)?;

        assert_eq!(seq.params()[0].current_move(), 3);
        assert_eq!(seq.params()[1].current_move(), 0);
        assert_eq!(seq.pivots().len(), 2);
        Ok(())
    }
}
