// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squares Logo: the animation model behind the squares-logo screen saver.
//!
//! The logo is a fixed 16×16 bitmap of white, black, and red cells. This
//! crate turns that table into motion and does nothing else. It provides:
//! - The logo table and its cells ([`LogoGrid`], [`SQUARES_LOGO`], [`Cell`]).
//! - The palette ([`Palette`], [`ColorIndex`]).
//! - Mapping the 1024×1024 logical canvas into an arbitrary rectangle
//!   ([`fit_rect`], [`fit_transform`], [`FitPolicy`]).
//! - The 2D bounce model: a logo drifting at constant speed and reflecting
//!   off the canvas edges ([`BounceState`], [`advance_bounce`]).
//! - The 3D breathing grid: every cell pulses out and back in time with a
//!   shared tempo ([`build_grid_animation`], [`Tempo`]).
//!
//! It does **not** own a window, a timer, or a renderer. Hosts are
//! expected to:
//! - Call [`advance_bounce`] (or [`BounceState::step`]) once per frame tick.
//! - Install [`CellAnimation::steps`] as repeating actions in their scene
//!   graph, or sample [`CellAnimation::pose_at`] themselves.
//! - Perform the one-time random draws with a seeded generator from
//!   [`random::seeded`].
//!
//! ## Bounce example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use squares_logo::{BounceState, advance_bounce};
//!
//! let canvas = Size::new(100.0, 100.0);
//! let mut state = BounceState::new(Point::new(10.0, 50.0), Vec2::new(-3.0, 1.0), 5.0);
//! for _ in 0..3 {
//!     state = advance_bounce(state, canvas);
//! }
//! // The left wall was reached on the third tick.
//! assert_eq!(state.velocity, Vec2::new(3.0, 1.0));
//! ```
//!
//! ## Breathing-grid example
//!
//! ```rust
//! use squares_logo::{SQUARES_LOGO, Tempo, build_grid_animation, random};
//!
//! let mut rng = random::seeded(0x5eed);
//! let tempo = Tempo::draw(&mut rng, squares_logo::DEFAULT_BPM_RANGE);
//! let cells = build_grid_animation(&SQUARES_LOGO, 1.0, tempo);
//! assert_eq!(cells.len(), SQUARES_LOGO.len());
//!
//! let pose = cells[0].pose_at(tempo.beat_duration() / 6.0);
//! assert!(pose.position.z >= cells[0].position.z);
//! ```
//!
//! ## Fit example
//!
//! ```rust
//! use kurbo::Rect;
//! use squares_logo::{FitPolicy, fit_rect};
//!
//! let logo = Rect::new(0.0, 0.0, 1024.0, 1024.0);
//! let fitted = fit_rect(logo, Rect::new(0.0, 0.0, 2048.0, 1024.0), FitPolicy::AspectFit);
//! assert_eq!(fitted, Rect::new(512.0, 0.0, 1536.0, 1024.0));
//! ```

mod bounce;
mod breathe;
mod fit;
mod grid;
mod palette;
pub mod random;
mod tempo;

pub use bounce::{
    BounceState, DEFAULT_LOGO_SIZE, DEFAULT_SPEED, Reflection, advance_bounce, initial_velocity,
    out_of_bounds,
};
pub use breathe::{
    BreathPhase, CellAnimation, CellPose, MAX_TILT, MIN_LIFT_ARGUMENT, PhaseSchedule, PhaseStep,
    build_grid_animation, build_grid_animation_with_tilt, cell_rotation, cell_translation, sign,
};
pub use fit::{FitPolicy, fit_rect, fit_transform};
pub use grid::{CANVAS_CELL_SIZE, CANVAS_SIZE, Cell, GRID_SIZE, LogoGrid, SQUARES_LOGO};
pub use palette::{ColorIndex, GHOST_ALPHA, Palette, background};
pub use tempo::{DEFAULT_BPM, DEFAULT_BPM_RANGE, Tempo};

pub use glam::DVec3;
