//! Per-cube animation state machine
//!
//! Each cube steps through its own move list independently. A tick carries one
//! incremental angle per cube; the only cross-cube coupling is the check that
//! every cube has played its last move.

use crate::algorithm::moves::{Move, ParamsMove};
use crate::algorithm::preroll::apply_preroll;
use crate::io::error::Result;
use crate::math::geometry::{QUARTER_TURN, layer_rotation};
use crate::spatial::layer::{Pivots, members_of};
use crate::spatial::store::{CubieId, TransformStore};

// Accumulated angle this close to a quarter turn completes the move
const COMPLETION_EPSILON: f64 = 1e-9;

/// Lifecycle of one reveal run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    /// Nothing initialized; ticks are ignored
    Idle,
    /// Pre-roll applied, waiting for the first tick
    PreRolled,
    /// At least one tick has been processed
    Running,
    /// Every cube has played its whole move list
    Finished,
}

/// Discrete notifications emitted by ticks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The first tick of a run was processed
    Started,
    /// A cube completed the quarter turn at `move_index`
    MoveCompleted {
        /// Cube index
        cube: usize,
        /// Index of the completed move
        move_index: usize,
    },
    /// Every cube reached the end of its move list
    Finished,
}

/// Rotate the cubies currently in a layer of `cube` by `angle` radians
///
/// The rotation is multiplied onto each member's existing transform. Returns
/// the number of cubies moved.
///
/// # Errors
///
/// Propagates store and layer lookup errors
pub fn rotate_layer(
    store: &mut TransformStore,
    pivots: &Pivots,
    cube: usize,
    mv: Move,
    angle: f64,
) -> Result<usize> {
    let members = members_of(store, mv.axis, cube, mv.face, pivots)?;
    let rotation = layer_rotation(mv.axis, pivots.layer_center(mv.axis, mv.face)?, angle);

    for (slot, transform) in &members {
        store.set(CubieId::new(cube, *slot), rotation * *transform)?;
    }

    Ok(members.len())
}

/// Owner of the transform store and every cube's move progress
#[derive(Debug, Clone)]
pub struct Sequencer {
    store: TransformStore,
    pivots: Vec<Pivots>,
    params: Vec<ParamsMove>,
    applied: Vec<f64>,
    state: SequencerState,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::idle()
    }
}

impl Sequencer {
    /// A sequencer with no cubes that ignores ticks
    pub fn idle() -> Self {
        Self {
            store: TransformStore::new(0),
            pivots: Vec::new(),
            params: Vec::new(),
            applied: Vec::new(),
            state: SequencerState::Idle,
        }
    }

    /// Apply the pre-roll to every cube and wait for the first tick
    ///
    /// Starts out `Finished` when no cube has a move left to animate.
    ///
    /// # Errors
    ///
    /// Propagates store and layer lookup errors
    pub fn prerolled(
        mut store: TransformStore,
        pivots: Vec<Pivots>,
        mut params: Vec<ParamsMove>,
        preroll_moves: usize,
    ) -> Result<Self> {
        for (cube, (cube_pivots, cube_params)) in pivots.iter().zip(params.iter_mut()).enumerate()
        {
            apply_preroll(&mut store, cube_pivots, cube, cube_params, preroll_moves)?;
        }

        let applied = vec![0.0; params.len()];
        let state = if params.iter().all(ParamsMove::is_finished) {
            SequencerState::Finished
        } else {
            SequencerState::PreRolled
        };
        Ok(Self {
            store,
            pivots,
            params,
            applied,
            state,
        })
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SequencerState {
        self.state
    }

    /// Transforms owned by this sequencer; read only between ticks
    pub const fn store(&self) -> &TransformStore {
        &self.store
    }

    /// Give up ownership of the transforms
    pub fn into_store(self) -> TransformStore {
        self.store
    }

    /// Move progress of every cube
    pub fn params(&self) -> &[ParamsMove] {
        &self.params
    }

    /// Pivots of every cube
    pub fn pivots(&self) -> &[Pivots] {
        &self.pivots
    }

    /// Angle already applied to each cube's current move
    pub fn applied(&self) -> &[f64] {
        &self.applied
    }

    /// Whether every cube has played its whole move list
    pub fn all_finished(&self) -> bool {
        self.params.iter().all(ParamsMove::is_finished)
    }

    /// Advance every unfinished cube by its entry in `deltas`
    ///
    /// Deltas are unsigned angles in radians; the move's direction supplies the
    /// sign. Missing, negative or non-finite entries count as zero, and any
    /// excess beyond the current quarter turn is dropped, so a cube completes
    /// at most one move per tick.
    ///
    /// # Errors
    ///
    /// Propagates store and layer lookup errors
    pub fn tick(&mut self, deltas: &[f64]) -> Result<Vec<AnimationEvent>> {
        let mut events = Vec::new();
        match self.state {
            SequencerState::Idle | SequencerState::Finished => return Ok(events),
            SequencerState::PreRolled => {
                self.state = SequencerState::Running;
                events.push(AnimationEvent::Started);
            }
            SequencerState::Running => {}
        }

        for cube in 0..self.params.len() {
            let delta = deltas
                .get(cube)
                .copied()
                .filter(|d| d.is_finite())
                .unwrap_or(0.0)
                .max(0.0);
            if let Some(event) = self.step_cube(cube, delta)? {
                events.push(event);
            }
        }

        if self.all_finished() {
            self.state = SequencerState::Finished;
            events.push(AnimationEvent::Finished);
        }

        Ok(events)
    }

    fn step_cube(&mut self, cube: usize, delta: f64) -> Result<Option<AnimationEvent>> {
        let (Some(params), Some(pivots), Some(applied)) = (
            self.params.get_mut(cube),
            self.pivots.get(cube),
            self.applied.get_mut(cube),
        ) else {
            return Ok(None);
        };
        let Some(current) = params.current() else {
            return Ok(None);
        };

        let step = delta.min(QUARTER_TURN - *applied);
        if step > 0.0 {
            rotate_layer(
                &mut self.store,
                pivots,
                cube,
                current,
                step * current.direction.sign(),
            )?;
            *applied += step;
        }

        if *applied < QUARTER_TURN - COMPLETION_EPSILON {
            return Ok(None);
        }

        let move_index = params.current_move();
        params.advance();
        *applied = 0.0;
        Ok(Some(AnimationEvent::MoveCompleted { cube, move_index }))
    }
}
