// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::debug;
use squares_logo::{
    CellAnimation, CellPose, LogoGrid, SQUARES_LOGO, Tempo, build_grid_animation_with_tilt, random,
};

use crate::config::{ConfigError, GridConfig};
use crate::lifecycle::{Lifecycle, LifecycleState};

/// The 3D saver: the logo as a grid of cuboids breathing to a shared tempo.
///
/// Everything is computed at construction. A host with a retained scene
/// graph installs each cell's [`CellAnimation::steps`] once and lets its
/// engine run the clock; there is no per-frame work. Hosts without one can
/// sample [`poses_at`](Self::poses_at).
#[derive(Clone, Debug)]
pub struct GridSaver {
    config: GridConfig,
    tempo: Tempo,
    cells: Vec<CellAnimation>,
    lifecycle: Lifecycle,
}

impl GridSaver {
    /// Builds the scene for [`SQUARES_LOGO`], drawing the tempo once from `seed`.
    pub fn new(is_preview: bool, config: GridConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_grid(&SQUARES_LOGO, is_preview, config, seed)
    }

    /// Builds the scene for an arbitrary grid.
    pub fn with_grid(
        grid: &LogoGrid,
        is_preview: bool,
        config: GridConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = random::seeded(seed);
        let tempo = Tempo::draw(&mut rng, config.bpm_range.clone());
        let cells = build_grid_animation_with_tilt(grid, config.cell_size, tempo, config.max_tilt);
        debug!(
            "grid saver built: {} cells at {} bpm, preview {is_preview}",
            cells.len(),
            tempo.bpm()
        );
        Ok(Self {
            lifecycle: Lifecycle::new(is_preview, config.preview_only),
            config,
            tempo,
            cells,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The tempo drawn at construction.
    #[must_use]
    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    /// Per-cell animations, in grid row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellAnimation] {
        &self.cells
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Host start callback.
    pub fn start_animation(&mut self) {
        self.lifecycle.start();
    }

    /// Host stop callback.
    pub fn stop_animation(&mut self) {
        self.lifecycle.stop();
    }

    /// Samples every cell `elapsed` seconds into the animation.
    ///
    /// Empty unless the saver is animating.
    #[must_use]
    pub fn poses_at(&self, elapsed: f64) -> Vec<CellPose> {
        if !self.lifecycle.can_advance() {
            return Vec::new();
        }
        self.cells.iter().map(|cell| cell.pose_at(elapsed)).collect()
    }
}
