// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host's immediate-mode 2D drawing surface, and a recording stand-in.

use kurbo::{Affine, Rect};
use peniko::Color;

/// Immediate-mode 2D drawing operations the savers need from a host.
///
/// Transforms form a stack: each push concatenates onto the current
/// transform and each pop restores the previous one. Transparency layers
/// group fills so they composite as one.
pub trait LogoCanvas {
    /// Fill `rect`, in the current user space, with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Concatenate `transform` onto the current transform and save the previous one.
    fn push_transform(&mut self, transform: Affine);

    /// Restore the transform saved by the matching [`push_transform`](Self::push_transform).
    fn pop_transform(&mut self);

    /// Begin grouping subsequent fills into one composited layer.
    fn begin_transparency_layer(&mut self);

    /// End the layer opened by the matching [`begin_transparency_layer`](Self::begin_transparency_layer).
    fn end_transparency_layer(&mut self);

    /// Run `f` with `transform` pushed, popping it afterwards.
    ///
    /// Note: if `f` panics, the transform will not be popped.
    #[inline]
    fn with_transform<R>(&mut self, transform: Affine, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.push_transform(transform);
        let out = f(self);
        self.pop_transform();
        out
    }

    /// Run `f` inside a transparency layer.
    ///
    /// Note: if `f` panics, the layer will not be ended.
    #[inline]
    fn with_transparency_layer<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.begin_transparency_layer();
        let out = f(self);
        self.end_transparency_layer();
        out
    }
}

/// One recorded canvas call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasOp {
    /// [`LogoCanvas::fill_rect`].
    FillRect {
        /// Rectangle in user space at the time of the call.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// Full transform in effect at the time of the call.
        transform: Affine,
    },
    /// [`LogoCanvas::push_transform`].
    PushTransform(Affine),
    /// [`LogoCanvas::pop_transform`].
    PopTransform,
    /// [`LogoCanvas::begin_transparency_layer`].
    BeginLayer,
    /// [`LogoCanvas::end_transparency_layer`].
    EndLayer,
}

/// A [`LogoCanvas`] that records every call instead of drawing.
///
/// Useful for headless hosts and tests. Unbalanced pops are ignored.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    stack: Vec<Affine>,
    current: Affine,
    layer_depth: usize,
}

impl RecordingCanvas {
    /// Creates an empty recording with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in call order.
    #[must_use]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Takes the recorded operations, leaving the recording empty.
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        core::mem::take(&mut self.ops)
    }

    /// Transform currently in effect.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.current
    }

    /// Number of transforms currently pushed.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of transparency layers currently open.
    #[must_use]
    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }

    /// Every filled rectangle mapped to device space (bounding box), with its color.
    pub fn device_fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            CanvasOp::FillRect {
                rect,
                color,
                transform,
            } => Some((transform.transform_rect_bbox(rect), color)),
            _ => None,
        })
    }
}

impl LogoCanvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(CanvasOp::FillRect {
            rect,
            color,
            transform: self.current,
        });
    }

    fn push_transform(&mut self, transform: Affine) {
        self.stack.push(self.current);
        self.current *= transform;
        self.ops.push(CanvasOp::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
            self.ops.push(CanvasOp::PopTransform);
        }
    }

    fn begin_transparency_layer(&mut self) {
        self.layer_depth += 1;
        self.ops.push(CanvasOp::BeginLayer);
    }

    fn end_transparency_layer(&mut self) {
        if self.layer_depth > 0 {
            self.layer_depth -= 1;
            self.ops.push(CanvasOp::EndLayer);
        }
    }
}
