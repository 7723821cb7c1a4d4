// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use log::{debug, trace};
use squares_logo::{BounceState, Palette, random};

use crate::canvas::LogoCanvas;
use crate::config::{ConfigError, SaverConfig};
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::paint::draw_logo;

/// The 2D saver: a logo bouncing around the host view.
///
/// The host calls [`layout`](Self::layout) when its view changes size,
/// [`start_animation`](Self::start_animation) and
/// [`stop_animation`](Self::stop_animation) around an animation session,
/// [`animate_one_frame`](Self::animate_one_frame) at its frame cadence, and
/// [`draw`](Self::draw) whenever it repaints.
#[derive(Clone, Debug)]
pub struct BounceSaver {
    config: SaverConfig,
    palette: Palette,
    bounds: Rect,
    bounce: BounceState,
    lifecycle: Lifecycle,
}

impl BounceSaver {
    /// Builds a saver for a view with the given frame.
    ///
    /// The velocity is drawn once here from `seed` and never redrawn. The
    /// logo starts centered in `frame`.
    pub fn new(
        frame: Rect,
        is_preview: bool,
        config: SaverConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = frame.abs();
        let mut rng = random::seeded(seed);
        let bounce = BounceState::with_random_velocity(
            &mut rng,
            local_center(bounds),
            config.logo_size / 2.0,
            config.speed,
        );
        debug!(
            "bounce saver built: bounds {bounds:?}, velocity {:?}, preview {is_preview}",
            bounce.velocity
        );
        Ok(Self {
            lifecycle: Lifecycle::new(is_preview, config.preview_only),
            config,
            palette: Palette::logo(),
            bounds,
            bounce,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &SaverConfig {
        &self.config
    }

    /// Current bounce state.
    #[must_use]
    pub fn bounce(&self) -> &BounceState {
        &self.bounce
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// View bounds the logo bounces inside.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The logo's bounding square in view coordinates.
    #[must_use]
    pub fn logo_rect(&self) -> Rect {
        let half = self.bounce.half_extent;
        let origin = self.bounds.origin().to_vec2();
        let center = self.bounce.center + origin;
        Rect::new(center.x - half, center.y - half, center.x + half, center.y + half)
    }

    /// Host layout callback.
    ///
    /// The new bounds always apply. The logo is re-centered before the first
    /// animation starts, and afterwards whenever its center falls outside the
    /// range it can bounce in. A moving logo that still fits keeps its place.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds.abs();
        if self.lifecycle.state() == LifecycleState::Constructed || !self.logo_fits() {
            self.bounce.center = local_center(self.bounds);
        }
        debug!("layout: bounds {:?}, center {:?}", self.bounds, self.bounce.center);
    }

    fn logo_fits(&self) -> bool {
        let half = self.bounce.half_extent;
        let size = self.bounds.size();
        let center = self.bounce.center;
        (half..=size.width - half).contains(&center.x)
            && (half..=size.height - half).contains(&center.y)
    }

    /// Host start callback.
    pub fn start_animation(&mut self) {
        self.lifecycle.start();
    }

    /// Host stop callback.
    pub fn stop_animation(&mut self) {
        self.lifecycle.stop();
    }

    /// Host frame callback: advances the bounce by one tick.
    ///
    /// Returns `true` if the state moved and the view needs a redraw.
    pub fn animate_one_frame(&mut self) -> bool {
        if !self.lifecycle.can_advance() {
            return false;
        }
        let reflection = self.bounce.step(self.bounds.size());
        if reflection.any() {
            trace!("reflected {reflection:?} at {:?}", self.bounce.center);
        }
        true
    }

    /// Host draw callback: background, then the logo at its current position.
    pub fn draw(&self, canvas: &mut impl LogoCanvas) {
        canvas.fill_rect(self.bounds, self.config.background);
        draw_logo(canvas, self.logo_rect(), self.config.resizing, &self.palette);
    }
}

/// Center of `bounds` relative to its own origin; the bounce model works in that space.
fn local_center(bounds: Rect) -> Point {
    Point::new(bounds.width() / 2.0, bounds.height() / 2.0)
}
