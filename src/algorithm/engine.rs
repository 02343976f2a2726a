//! Presentation-facing facade over the rotation engine
//!
//! The caller owns the scheduler: it calls [`MosaicEngine::tick`] (raw angles)
//! or [`MosaicEngine::advance`] (elapsed time) once per frame, reads
//! transforms between frames and drains the emitted events.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::clock::{Easing, MoveClock};
use crate::algorithm::moves::{AnimationShape, MoveGenerator, ParamsMove, Timing};
use crate::algorithm::sequencer::{AnimationEvent, Sequencer, SequencerState};
use crate::io::configuration::PREROLL_MOVES;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::face::{Face, MosaicLayout};
use crate::spatial::layer::Pivots;
use crate::spatial::store::TransformStore;

/// Engine parameters chosen by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Spatial function shaping per-cube move counts
    pub shape: AnimationShape,
    /// Durations scaling move counts and driving the clocks
    pub timing: Timing,
    /// Moves applied instantly at initialization
    pub preroll_moves: usize,
    /// Easing applied to move progress in [`MosaicEngine::advance`]
    pub easing: Easing,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shape: AnimationShape::default(),
            timing: Timing::default(),
            preroll_moves: PREROLL_MOVES,
            easing: Easing::default(),
        }
    }
}

/// Scramble-then-reveal engine for a whole mosaic
pub struct MosaicEngine<R: Rng = StdRng> {
    config: EngineConfig,
    rng: R,
    faces: Vec<Face>,
    layout: Option<MosaicLayout>,
    sequencer: Sequencer,
    clocks: Vec<MoveClock>,
    events: VecDeque<AnimationEvent>,
}

impl MosaicEngine<StdRng> {
    /// Engine with a reproducible random source
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MosaicEngine<R> {
    /// Engine drawing scramble moves from `rng`
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            faces: Vec::new(),
            layout: None,
            sequencer: Sequencer::idle(),
            clocks: Vec::new(),
            events: VecDeque::new(),
        }
    }

    /// Rebuild transforms, pivots and move lists, then apply the pre-roll
    ///
    /// An empty face list leaves the engine idle.
    ///
    /// # Errors
    ///
    /// Propagates store and layer lookup errors
    pub fn initialize(&mut self, faces: &[Face], layout: MosaicLayout) -> Result<()> {
        let generator =
            MoveGenerator::new(self.config.shape, layout, faces.len(), &self.config.timing);
        let sequences = faces
            .iter()
            .enumerate()
            .map(|(ordinal, face)| generator.generate_sequence(&mut self.rng, face, ordinal))
            .collect();
        self.initialize_with_sequences(faces, layout, sequences)
    }

    /// Initialize with caller-provided move lists instead of generated ones
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if there is not exactly one sequence per
    /// face, and propagates store and layer lookup errors
    pub fn initialize_with_sequences(
        &mut self,
        faces: &[Face],
        layout: MosaicLayout,
        sequences: Vec<ParamsMove>,
    ) -> Result<()> {
        if sequences.len() != faces.len() {
            return Err(invalid_parameter(
                "sequences",
                &sequences.len(),
                &format!("expected one sequence per face ({})", faces.len()),
            ));
        }

        self.faces = faces.to_vec();
        self.layout = Some(layout);

        if faces.is_empty() {
            log::debug!("No mosaic faces supplied; engine stays idle");
            self.sequencer = Sequencer::idle();
            self.clocks.clear();
            return Ok(());
        }

        let mut store = TransformStore::new(faces.len());
        for (cube, face) in faces.iter().enumerate() {
            store.initialize_cube(cube, face)?;
        }
        let pivots = faces.iter().map(Pivots::from_face).collect();

        self.start_run(store, pivots, sequences)?;

        let (done, total) = self.progress();
        log::debug!(
            "Initialized {} cubes: {total} moves, {done} pre-rolled ({:?})",
            faces.len(),
            self.config.shape
        );
        Ok(())
    }

    fn start_run(
        &mut self,
        store: TransformStore,
        pivots: Vec<Pivots>,
        sequences: Vec<ParamsMove>,
    ) -> Result<()> {
        let cube_count = sequences.len();
        self.sequencer =
            Sequencer::prerolled(store, pivots, sequences, self.config.preroll_moves)?;
        self.clocks = vec![MoveClock::new(&self.config.timing, self.config.easing); cube_count];
        if self.is_finished() {
            log::info!("Reveal finished at pre-roll for {cube_count} cubes");
            self.events
                .extend([AnimationEvent::Started, AnimationEvent::Finished]);
        }
        Ok(())
    }

    /// Advance every cube by its incremental angle in radians
    ///
    /// Entries are matched to cubes by index; a no-op unless the engine has
    /// been initialized and is not finished.
    ///
    /// # Errors
    ///
    /// Propagates store and layer lookup errors
    pub fn tick(&mut self, deltas: &[f64]) -> Result<()> {
        let events = self.sequencer.tick(deltas)?;
        for event in events {
            match event {
                AnimationEvent::MoveCompleted { cube, .. } => {
                    if let Some(clock) = self.clocks.get_mut(cube) {
                        clock.restart();
                    }
                }
                AnimationEvent::Finished => {
                    log::info!("Reveal finished for {} cubes", self.cube_count());
                }
                AnimationEvent::Started => {}
            }
            self.events.push_back(event);
        }
        Ok(())
    }

    /// Let `dt_ms` milliseconds pass on every cube's clock and tick once
    ///
    /// # Errors
    ///
    /// Propagates store and layer lookup errors
    pub fn advance(&mut self, dt_ms: f64) -> Result<()> {
        let deltas: Vec<f64> = self
            .clocks
            .iter_mut()
            .zip(self.sequencer.params())
            .map(|(clock, params)| {
                if params.is_finished() {
                    0.0
                } else {
                    clock.advance(dt_ms)
                }
            })
            .collect();
        self.tick(&deltas)
    }

    /// Restart the scramble and reveal; ignored unless the run has finished
    ///
    /// Returns whether the reset happened. Undrained events of the finished
    /// run stay queued ahead of the new run's events.
    ///
    /// # Errors
    ///
    /// Propagates store and layer lookup errors
    pub fn reset(&mut self) -> Result<bool> {
        if !self.is_finished() {
            log::debug!("Ignoring reset while {:?}", self.state());
            return Ok(false);
        }
        let Some(layout) = self.layout else {
            return Ok(false);
        };

        let faces = std::mem::take(&mut self.faces);
        let generator =
            MoveGenerator::new(self.config.shape, layout, faces.len(), &self.config.timing);
        let sequences = faces
            .iter()
            .enumerate()
            .map(|(ordinal, face)| generator.generate_sequence(&mut self.rng, face, ordinal))
            .collect();
        let pivots = faces.iter().map(Pivots::from_face).collect();
        let store = std::mem::take(&mut self.sequencer).into_store();
        self.faces = faces;

        self.start_run(store, pivots, sequences)?;
        log::debug!("Reset reveal for {} cubes", self.cube_count());
        Ok(true)
    }

    /// Whether every cube has played its whole move list
    pub const fn is_finished(&self) -> bool {
        matches!(self.sequencer.state(), SequencerState::Finished)
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Remove and return all events emitted since the last call
    ///
    /// Events survive `initialize` and `reset`, so a `Finished` is never lost
    /// to a restart.
    pub fn drain_events(&mut self) -> Vec<AnimationEvent> {
        self.events.drain(..).collect()
    }

    /// Live transforms; read only between ticks
    pub const fn store(&self) -> &TransformStore {
        self.sequencer.store()
    }

    /// Move progress of one cube
    pub fn params(&self, cube: usize) -> Option<&ParamsMove> {
        self.sequencer.params().get(cube)
    }

    /// Completed and total moves summed over every cube
    pub fn progress(&self) -> (usize, usize) {
        self.sequencer
            .params()
            .iter()
            .fold((0, 0), |(done, total), params| {
                (
                    done + params.current_move(),
                    total + params.moves_length(),
                )
            })
    }

    /// Number of mosaic cubes currently held
    pub fn cube_count(&self) -> usize {
        self.sequencer.params().len()
    }

    /// Layout given at the last initialization
    pub const fn layout(&self) -> Option<MosaicLayout> {
        self.layout
    }

    /// Engine parameters
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Largest deviation of any cubie from its initialized pose
    pub fn max_drift(&self) -> f64 {
        self.store().max_drift()
    }
}
