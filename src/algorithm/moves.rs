//! Quarter-turn moves and reversible scramble sequences
//!
//! A sequence is `n` random forward moves followed by their inverses in
//! reverse order, so applying the whole list telescopes to the identity.

use clap::ValueEnum;
use rand::Rng;

use crate::io::configuration::{
    DEFAULT_MOVE_DURATION_MS, DEFAULT_TOTAL_DURATION_MS, INTER_MOVE_DELAY_MS, LAYERS_PER_AXIS,
    MAX_TOTAL_MOVES,
};
use crate::math::geometry::{Axis, QUARTER_TURN};
use crate::spatial::face::{Face, MosaicLayout};

/// Turn direction of a quarter turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rotation by -pi/2
    Negative,
    /// Rotation by +pi/2
    Positive,
}

impl Direction {
    /// Sign of the rotation angle
    pub const fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }

    /// The opposite direction
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

/// A single quarter turn of one layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Rotation axis
    pub axis: Axis,
    /// Layer index in `0..3`
    pub face: usize,
    /// Turn direction
    pub direction: Direction,
}

impl Move {
    /// Create a move
    pub const fn new(axis: Axis, face: usize, direction: Direction) -> Self {
        Self {
            axis,
            face,
            direction,
        }
    }

    /// The move that undoes this one
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            direction: self.direction.reversed(),
            ..self
        }
    }

    /// Signed angle of the complete quarter turn
    pub const fn angle(self) -> f64 {
        QUARTER_TURN * self.direction.sign()
    }

    /// Uniformly sample axis, layer and direction
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let axis = Axis::ALL
            .get(rng.random_range(0..Axis::ALL.len()))
            .copied()
            .unwrap_or(Axis::X);
        let face = rng.random_range(0..LAYERS_PER_AXIS);
        let direction = if rng.random::<bool>() {
            Direction::Positive
        } else {
            Direction::Negative
        };
        Self::new(axis, face, direction)
    }
}

/// Spatial function shaping how many moves each cube receives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AnimationShape {
    /// Cubes far from the center scramble longest
    #[default]
    Wave,
    /// Cubes near the center scramble longest
    InvertedWave,
    /// Linear sweep across cube order
    OneByOne,
    /// Currently identical to `Wave`
    Random,
}

/// Durations that scale move counts and drive the clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Total reveal duration in milliseconds
    pub total_duration_ms: u32,
    /// Duration of one quarter turn in milliseconds
    pub move_duration_ms: u32,
    /// Pause between consecutive quarter turns
    pub inter_move_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            total_duration_ms: DEFAULT_TOTAL_DURATION_MS,
            move_duration_ms: DEFAULT_MOVE_DURATION_MS,
            inter_move_delay_ms: INTER_MOVE_DELAY_MS,
        }
    }
}

impl Timing {
    /// Quarter turns that fit into the total duration, capped at
    /// [`MAX_TOTAL_MOVES`]
    pub fn total_moves(&self) -> f64 {
        if self.move_duration_ms == 0 {
            return 0.0;
        }
        (f64::from(self.total_duration_ms) / f64::from(self.move_duration_ms))
            .min(f64::from(MAX_TOTAL_MOVES))
    }
}

/// Move list and progress of one mosaic cube
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamsMove {
    moves: Vec<Move>,
    current_move: usize,
}

impl ParamsMove {
    /// Sequence of `forward` followed by its inverses in reverse order
    pub fn mirrored(forward: Vec<Move>) -> Self {
        let mut moves = forward;
        let inverses: Vec<Move> = moves.iter().rev().map(|m| m.inverse()).collect();
        moves.extend(inverses);
        Self {
            moves,
            current_move: 0,
        }
    }

    /// Full ordered move list
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Length of the move list; always even
    pub const fn moves_length(&self) -> usize {
        self.moves.len()
    }

    /// Index of the next move to play
    pub const fn current_move(&self) -> usize {
        self.current_move
    }

    /// Move currently being played, if any remain
    pub fn current(&self) -> Option<Move> {
        self.moves.get(self.current_move).copied()
    }

    /// Whether every move has been played
    pub const fn is_finished(&self) -> bool {
        self.current_move >= self.moves.len()
    }

    pub(crate) const fn advance(&mut self) {
        if self.current_move < self.moves.len() {
            self.current_move += 1;
        }
    }
}

/// Produces per-cube reversible move lists
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator {
    shape: AnimationShape,
    layout: MosaicLayout,
    cube_count: usize,
    total_moves: f64,
}

impl MoveGenerator {
    /// Create a generator for a mosaic of `cube_count` cubes
    pub fn new(
        shape: AnimationShape,
        layout: MosaicLayout,
        cube_count: usize,
        timing: &Timing,
    ) -> Self {
        if u64::from(timing.move_duration_ms) * u64::from(MAX_TOTAL_MOVES)
            < u64::from(timing.total_duration_ms)
        {
            log::warn!(
                "{}ms at {}ms per move exceeds the move budget; capping at {MAX_TOTAL_MOVES}",
                timing.total_duration_ms,
                timing.move_duration_ms
            );
        }
        Self {
            shape,
            layout,
            cube_count,
            total_moves: timing.total_moves(),
        }
    }

    /// Share of the maximum center distance a point does *not* cover
    ///
    /// 1 at the geometric center, 0 at a corner.
    pub fn distance_ratio(&self, x: f64, y: f64) -> f64 {
        let max_distance = self.layout.max_distance_from_center();
        if max_distance <= 0.0 {
            return 1.0;
        }
        let (cx, cy) = self.layout.center();
        let distance = (x - cx).hypot(y - cy);
        ((max_distance - distance) / max_distance).clamp(0.0, 1.0)
    }

    /// Number of moves (before halving) for a cube at pixel (`x`, `y`)
    pub fn move_count_for(&self, x: f64, y: f64, ordinal: usize) -> f64 {
        match self.shape {
            AnimationShape::InvertedWave => self.total_moves * self.distance_ratio(x, y),
            AnimationShape::OneByOne => {
                if self.cube_count == 0 {
                    return 0.0;
                }
                ordinal as f64 / self.cube_count as f64 * self.total_moves
            }
            AnimationShape::Wave | AnimationShape::Random => {
                self.total_moves * (1.0 - self.distance_ratio(x, y))
            }
        }
    }

    /// Move count for the cube showing `face`, measured at its center tile
    pub fn move_count_for_face(&self, face: &Face, ordinal: usize) -> f64 {
        let center = face.center();
        let (x, y) = self.layout.tile_center(center.x, center.y);
        self.move_count_for(x, y, ordinal)
    }

    /// Random reversible sequence for the cube showing `face`
    pub fn generate_sequence<R: Rng>(
        &self,
        rng: &mut R,
        face: &Face,
        ordinal: usize,
    ) -> ParamsMove {
        let half = (self.move_count_for_face(face, ordinal) / 2.0).ceil().max(0.0) as usize;
        let forward = (0..half).map(|_| Move::random(rng)).collect();
        ParamsMove::mirrored(forward)
    }
}
