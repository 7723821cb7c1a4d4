// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use squares_logo::{
    CANVAS_CELL_SIZE, CANVAS_SIZE, ColorIndex, FitPolicy, LogoGrid, Palette, SQUARES_LOGO,
    fit_transform,
};

use crate::canvas::LogoCanvas;

/// The 1024×1024 logical canvas the logo is authored on.
pub const LOGO_CANVAS: Rect = Rect::new(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);

/// Draws [`SQUARES_LOGO`] into `target` on `canvas`.
///
/// See [`draw_grid`].
pub fn draw_logo(canvas: &mut impl LogoCanvas, target: Rect, policy: FitPolicy, palette: &Palette) {
    draw_grid(canvas, &SQUARES_LOGO, target, policy, palette);
}

/// Draws every cell of `grid` as a square, mapped from the logical canvas into `target`.
///
/// The fit transform is pushed around a single transparency layer; inside
/// it all white cells are filled first, then black, then red.
pub fn draw_grid(
    canvas: &mut impl LogoCanvas,
    grid: &LogoGrid,
    target: Rect,
    policy: FitPolicy,
    palette: &Palette,
) {
    let transform = fit_transform(LOGO_CANVAS, target, policy);
    canvas.with_transform(transform, |canvas| {
        canvas.with_transparency_layer(|canvas| {
            for index in ColorIndex::ALL {
                let color = palette.color(index);
                for cell in grid.cells_of(index) {
                    canvas.fill_rect(cell.canvas_rect(CANVAS_CELL_SIZE), color);
                }
            }
        });
    });
}
