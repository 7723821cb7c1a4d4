// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squares Logo Saver: host-driven screen saver drivers for the squares logo.
//!
//! A screen-saver host owns the window, the timer, and the renderer, and
//! calls into the saver at fixed lifecycle points: construction, layout,
//! start, one call per frame, draw, and stop. This crate packages the
//! [`squares_logo`] models behind those callbacks:
//!
//! - [`BounceSaver`]: the 2D logo bouncing around the view.
//! - [`GridSaver`]: the 3D breathing grid, built once and handed to the
//!   host's scene graph.
//! - [`Lifecycle`]: the `Constructed` → `Animating` → `Stopped` state
//!   machine, including the optional preview-only guard.
//! - [`LogoCanvas`]: the immediate-mode drawing surface the host provides,
//!   with [`RecordingCanvas`] as a headless stand-in.
//! - [`SaverConfig`] / [`GridConfig`]: settings, validated up front.
//!
//! Random choices (the bounce direction, the tempo) are drawn once from a
//! caller-supplied seed at construction and never redrawn.
//!
//! Lifecycle transitions and construction are reported through the `log`
//! facade at `debug` level; wall reflections at `trace` level.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use squares_logo_saver::{BounceSaver, RecordingCanvas, SaverConfig};
//!
//! let frame = Rect::new(0.0, 0.0, 1280.0, 800.0);
//! let mut saver = BounceSaver::new(frame, false, SaverConfig::default(), 42)?;
//!
//! saver.start_animation();
//! for _ in 0..30 {
//!     if saver.animate_one_frame() {
//!         let mut canvas = RecordingCanvas::new();
//!         saver.draw(&mut canvas);
//!         assert!(!canvas.ops().is_empty());
//!     }
//! }
//! saver.stop_animation();
//! # Ok::<(), squares_logo_saver::ConfigError>(())
//! ```

mod bounce_saver;
mod canvas;
mod config;
mod grid_saver;
mod lifecycle;
mod paint;

pub use bounce_saver::BounceSaver;
pub use canvas::{CanvasOp, LogoCanvas, RecordingCanvas};
pub use config::{ConfigError, GridConfig, SaverConfig};
pub use grid_saver::GridSaver;
pub use lifecycle::{Lifecycle, LifecycleState};
pub use paint::{LOGO_CANVAS, draw_grid, draw_logo};
