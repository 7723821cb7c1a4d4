// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle state machine for host-driven savers.
//!
//! ## Usage
//!
//! 1) Create a [`Lifecycle`] when the host constructs the saver.
//! 2) Call [`Lifecycle::start`] from the host's start callback.
//! 3) Check [`Lifecycle::can_advance`] at the top of every frame callback.
//! 4) Call [`Lifecycle::stop`] from the host's stop callback.
//!
//! Hosts may keep calling the frame callback after a stop; those calls are
//! simply ignored.
//!
//! ## Minimal example
//!
//! ```
//! use squares_logo_saver::{Lifecycle, LifecycleState};
//!
//! let mut lifecycle = Lifecycle::new(true, false);
//! assert!(!lifecycle.can_advance());
//!
//! lifecycle.start();
//! assert_eq!(lifecycle.state(), LifecycleState::Animating);
//! assert!(lifecycle.can_advance());
//!
//! lifecycle.stop();
//! assert!(!lifecycle.can_advance());
//! ```

use log::debug;

/// Where a saver is in its host-driven lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Built and laid out, not yet animating.
    #[default]
    Constructed,
    /// Receiving frame callbacks.
    Animating,
    /// Told to stop; may be started again.
    Stopped,
}

/// Tracks [`LifecycleState`] plus the preview-only guard.
///
/// When `preview_only` is set and the saver is not running as a preview,
/// every transition and every frame is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct Lifecycle {
    state: LifecycleState,
    is_preview: bool,
    preview_only: bool,
}

impl Lifecycle {
    /// Creates a lifecycle in [`LifecycleState::Constructed`].
    #[must_use]
    pub fn new(is_preview: bool, preview_only: bool) -> Self {
        Self {
            state: LifecycleState::Constructed,
            is_preview,
            preview_only,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the host runs this instance as a preview.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.is_preview
    }

    /// Returns `true` if the preview-only guard lets this instance run.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.preview_only || self.is_preview
    }

    /// Enters [`LifecycleState::Animating`] from any other state.
    ///
    /// Returns `true` if the state changed.
    pub fn start(&mut self) -> bool {
        if !self.is_enabled() {
            debug!("start ignored: saver only animates in preview");
            return false;
        }
        if self.state == LifecycleState::Animating {
            return false;
        }
        debug!("lifecycle {:?} -> Animating", self.state);
        self.state = LifecycleState::Animating;
        true
    }

    /// Enters [`LifecycleState::Stopped`] from [`LifecycleState::Animating`].
    ///
    /// Returns `true` if the state changed.
    pub fn stop(&mut self) -> bool {
        if !self.is_enabled() || self.state != LifecycleState::Animating {
            return false;
        }
        debug!("lifecycle Animating -> Stopped");
        self.state = LifecycleState::Stopped;
        true
    }

    /// Returns `true` if a frame callback should advance the animation.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.is_enabled() && self.state == LifecycleState::Animating
    }
}
