// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The breathing grid: every non-empty cell becomes a cuboid that moves
//! out along its own vector, comes back, and rests, in lockstep with every
//! other cell.
//!
//! The output is build-time data. A retained scene graph installs
//! [`CellAnimation::steps`] as a repeating action and owns the clock from
//! then on; hosts without one can sample [`CellAnimation::pose_at`].

use core::f64::consts::PI;

use glam::DVec3;

use crate::grid::{Cell, LogoGrid};
use crate::palette::ColorIndex;
use crate::tempo::Tempo;

/// Largest tilt unit, in radians, scaled by the log of a cell's distance from center.
pub const MAX_TILT: f64 = PI / 72.0;

/// Floor for the lift logarithm's argument.
///
/// Products below this, including the zero product on the outer ring, give
/// no lift at all.
pub const MIN_LIFT_ARGUMENT: f64 = 1.0;

/// `-1`, `0`, or `1`; unlike [`f64::signum`], zero (and NaN) map to `0`.
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// One of the three equal parts of a beat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreathPhase {
    /// Move and tilt away from rest.
    Out,
    /// Move and tilt back to rest.
    In,
    /// Hold still at rest.
    Rest,
}

impl BreathPhase {
    /// The phases in cycle order.
    pub const CYCLE: [Self; 3] = [Self::Out, Self::In, Self::Rest];
}

/// One keyframe action of the repeating cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseStep {
    /// Which part of the beat this is.
    pub phase: BreathPhase,
    /// Length in seconds.
    pub duration: f64,
    /// Relative translation applied over the step.
    pub translate: DVec3,
    /// Relative rotation applied over the step, in radians.
    pub rotate: DVec3,
}

/// Timing shared by every cell of one scene.
///
/// The cycle starts at time zero and repeats every beat; there is no
/// per-cell phase offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSchedule {
    beat_duration: f64,
}

impl PhaseSchedule {
    /// Schedule for the given tempo.
    #[must_use]
    pub fn new(tempo: Tempo) -> Self {
        Self {
            beat_duration: tempo.beat_duration(),
        }
    }

    /// Length of a full out/in/rest cycle in seconds.
    #[must_use]
    pub fn beat_duration(&self) -> f64 {
        self.beat_duration
    }

    /// Length of each of the three phases.
    #[must_use]
    pub fn phase_duration(&self) -> f64 {
        self.beat_duration / 3.0
    }

    /// Returns the phase active at `time` seconds and the progress through it in `[0, 1)`.
    ///
    /// Negative or non-finite times are treated as zero.
    #[must_use]
    pub fn phase_at(&self, time: f64) -> (BreathPhase, f64) {
        let time = if time.is_finite() && time > 0.0 {
            time
        } else {
            0.0
        };
        let step = self.phase_duration();
        let local = time % self.beat_duration;
        let slot = (local / step).floor();
        let (phase, start) = if slot < 1.0 {
            (BreathPhase::Out, 0.0)
        } else if slot < 2.0 {
            (BreathPhase::In, step)
        } else {
            (BreathPhase::Rest, 2.0 * step)
        };
        let progress = ((local - start) / step).clamp(0.0, 1.0);
        (phase, progress)
    }
}

/// Position and orientation of one cell at an instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPose {
    /// World position of the cuboid's center.
    pub position: DVec3,
    /// Euler rotation in radians.
    pub rotation: DVec3,
}

/// Build-time animation parameters for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellAnimation {
    /// Row in the source grid.
    pub row: usize,
    /// Column in the source grid.
    pub col: usize,
    /// Color slot.
    pub color: ColorIndex,
    /// Rest position.
    pub position: DVec3,
    /// Displacement reached at the end of the out phase.
    pub translation: DVec3,
    /// Rotation reached at the end of the out phase.
    pub rotation: DVec3,
    /// Shared timing.
    pub schedule: PhaseSchedule,
}

impl CellAnimation {
    /// The three keyframe actions of one beat: out, back, hold.
    #[must_use]
    pub fn steps(&self) -> [PhaseStep; 3] {
        let duration = self.schedule.phase_duration();
        [
            PhaseStep {
                phase: BreathPhase::Out,
                duration,
                translate: self.translation,
                rotate: self.rotation,
            },
            PhaseStep {
                phase: BreathPhase::In,
                duration,
                translate: -self.translation,
                rotate: -self.rotation,
            },
            PhaseStep {
                phase: BreathPhase::Rest,
                duration,
                translate: DVec3::ZERO,
                rotate: DVec3::ZERO,
            },
        ]
    }

    /// Samples the cycle at `time` seconds with linear keyframe interpolation.
    #[must_use]
    pub fn pose_at(&self, time: f64) -> CellPose {
        let (phase, progress) = self.schedule.phase_at(time);
        let amount = match phase {
            BreathPhase::Out => progress,
            BreathPhase::In => 1.0 - progress,
            BreathPhase::Rest => 0.0,
        };
        CellPose {
            position: self.position + self.translation * amount,
            rotation: self.rotation * amount,
        }
    }
}

/// Translation a cell reaches at the peak of its breath.
///
/// The planar part points away from the center in proportion to the
/// offset. The lift is `ln` of the product of the remaining distances to the
/// grid edge on each axis, so it peaks near the center and is zero on the
/// outermost cells.
#[must_use]
pub fn cell_translation(cell: &Cell, cell_size: f64) -> DVec3 {
    let off = LogoGrid::center_offset();
    let offset = cell.offset();
    let reach = (off - offset.x.abs()) * (off - offset.y.abs());
    DVec3::new(
        cell_size * (offset.x / off),
        cell_size * (offset.y / off),
        cell_size * reach.max(MIN_LIFT_ARGUMENT).ln(),
    )
}

/// Rotation a cell reaches at the peak of its breath.
///
/// Cells tip away from the center: rows above it tilt back about x, columns
/// right of it turn about y. The angle grows with the log of the distance.
#[must_use]
pub fn cell_rotation(cell: &Cell, max_tilt: f64) -> DVec3 {
    let offset = cell.offset();
    let spread = ((offset.x.abs() + 1.0) * (offset.y.abs() + 1.0)).ln();
    DVec3::new(
        max_tilt * -sign(offset.y) * spread,
        max_tilt * sign(offset.x) * spread,
        0.0,
    )
}

/// Builds the animation for every non-empty cell of `grid`, using [`MAX_TILT`].
///
/// Empty cells produce nothing, so the result has exactly
/// [`LogoGrid::len`] entries, in row-major order.
#[must_use]
pub fn build_grid_animation(grid: &LogoGrid, cell_size: f64, tempo: Tempo) -> Vec<CellAnimation> {
    build_grid_animation_with_tilt(grid, cell_size, tempo, MAX_TILT)
}

/// Like [`build_grid_animation`] with an explicit tilt unit.
///
/// A non-finite or non-positive `cell_size` collapses every position and
/// translation to zero; a non-finite `max_tilt` disables rotation.
#[must_use]
pub fn build_grid_animation_with_tilt(
    grid: &LogoGrid,
    cell_size: f64,
    tempo: Tempo,
    max_tilt: f64,
) -> Vec<CellAnimation> {
    let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
        cell_size
    } else {
        0.0
    };
    let max_tilt = if max_tilt.is_finite() { max_tilt } else { 0.0 };
    let schedule = PhaseSchedule::new(tempo);
    grid.cells()
        .map(|cell| CellAnimation {
            row: cell.row,
            col: cell.col,
            color: cell.color,
            position: cell.rest_position(cell_size),
            translation: cell_translation(&cell, cell_size),
            rotation: cell_rotation(&cell, max_tilt),
            schedule,
        })
        .collect()
}
