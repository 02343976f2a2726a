//! Conversion of move progress into per-tick rotation angles
//!
//! The clock only ever hands out the difference between the eased target angle
//! and what it has already handed out, so the angles of one move always sum to
//! a quarter turn once progress reaches 1.

use clap::ValueEnum;

use crate::algorithm::moves::Timing;
use crate::math::geometry::QUARTER_TURN;

/// Easing curve applied to normalized move progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Easing {
    /// Constant angular speed
    Linear,
    /// Hermite smoothstep, slow at both ends
    #[default]
    SmoothStep,
}

impl Easing {
    /// Eased value of `progress`, clamped to `0..=1`
    pub fn apply(self, progress: f64) -> f64 {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => p,
            Self::SmoothStep => p * p * 2.0f64.mul_add(-p, 3.0),
        }
    }
}

/// Per-cube clock for the move currently being animated
#[derive(Clone, Copy, Debug)]
pub struct MoveClock {
    move_duration_ms: f64,
    delay_ms: f64,
    elapsed_ms: f64,
    applied: f64,
    easing: Easing,
}

impl MoveClock {
    /// Create a clock at the start of a move's inter-move delay
    pub fn new(timing: &Timing, easing: Easing) -> Self {
        Self {
            move_duration_ms: f64::from(timing.move_duration_ms),
            delay_ms: f64::from(timing.inter_move_delay_ms),
            elapsed_ms: 0.0,
            applied: 0.0,
            easing,
        }
    }

    /// Incremental angle that brings the move to `progress`
    ///
    /// Progress that moves backwards yields zero.
    pub fn delta_for_progress(&mut self, progress: f64) -> f64 {
        let target = self.easing.apply(progress) * QUARTER_TURN;
        let delta = (target - self.applied).max(0.0);
        self.applied += delta;
        delta
    }

    /// Let `dt_ms` pass and return the angle to apply this tick
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        self.elapsed_ms += dt_ms.max(0.0);
        let active = self.elapsed_ms - self.delay_ms;
        if active <= 0.0 {
            return 0.0;
        }
        let progress = if self.move_duration_ms <= 0.0 {
            1.0
        } else {
            active / self.move_duration_ms
        };
        self.delta_for_progress(progress)
    }

    /// Angle handed out for the current move so far
    pub const fn applied(&self) -> f64 {
        self.applied
    }

    /// Start the next move, beginning with its delay
    pub const fn restart(&mut self) {
        self.elapsed_ms = 0.0;
        self.applied = 0.0;
    }
}
