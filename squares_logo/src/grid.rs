// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed 16×16 logo bitmap and the cells derived from it.

use glam::DVec3;
use kurbo::{Rect, Vec2};

use crate::palette::ColorIndex;

/// Number of rows and columns in a [`LogoGrid`].
pub const GRID_SIZE: usize = 16;

/// Side of one cell on the 1024×1024 logical canvas.
pub const CANVAS_CELL_SIZE: f64 = 64.0;

/// Side of the logical canvas the 2D logo is authored on.
pub const CANVAS_SIZE: f64 = CANVAS_CELL_SIZE * GRID_SIZE as f64;

/// An immutable table of color slots, rows listed top to bottom.
///
/// `0` marks an empty cell; `1`, `2`, and `3` are [`ColorIndex`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoGrid {
    rows: [[u8; GRID_SIZE]; GRID_SIZE],
}

/// The squares logo.
pub static SQUARES_LOGO: LogoGrid = LogoGrid::new([
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 3, 3, 3, 2, 1, 2, 1, 3, 3, 3, 0, 0, 0],
    [0, 0, 0, 3, 2, 2, 1, 2, 2, 2, 1, 3, 3, 0, 0, 0],
    [0, 0, 0, 2, 2, 1, 2, 2, 2, 1, 2, 1, 3, 0, 0, 0],
    [0, 0, 0, 0, 2, 2, 2, 1, 2, 2, 2, 2, 1, 0, 0, 0],
    [0, 0, 0, 2, 1, 2, 1, 2, 2, 1, 2, 1, 3, 3, 0, 0],
    [0, 0, 3, 3, 2, 2, 1, 2, 2, 2, 2, 1, 3, 3, 0, 0],
    [0, 0, 3, 3, 3, 2, 2, 2, 2, 2, 1, 2, 1, 0, 0, 0],
    [0, 0, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 0, 0, 0],
    [0, 0, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 0, 0, 0],
    [0, 0, 3, 3, 3, 3, 3, 2, 1, 3, 3, 3, 3, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
]);

impl LogoGrid {
    /// Wraps a table of rows.
    #[must_use]
    pub const fn new(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Distance from the first index to the grid center, `(GRID_SIZE - 1) / 2`.
    #[must_use]
    pub const fn center_offset() -> f64 {
        (GRID_SIZE - 1) as f64 / 2.0
    }

    /// Returns the color slot at `(row, col)`, or `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<ColorIndex> {
        let value = *self.rows.get(row)?.get(col)?;
        ColorIndex::from_u8(value)
    }

    /// Iterates the non-empty cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, values)| {
            values.iter().enumerate().filter_map(move |(col, &value)| {
                ColorIndex::from_u8(value).map(|color| Cell { row, col, color })
            })
        })
    }

    /// Iterates the non-empty cells of one color slot in row-major order.
    pub fn cells_of(&self, color: ColorIndex) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |cell| cell.color == color)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells().count()
    }

    /// Returns `true` if every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }
}

/// One non-empty entry of a [`LogoGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
    /// Color slot.
    pub color: ColorIndex,
}

impl Cell {
    /// Offset from the grid center in cell units.
    ///
    /// The vertical axis points up, so larger row indices give smaller `y`.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        let off = LogoGrid::center_offset();
        Vec2::new(self.col as f64 - off, off - self.row as f64)
    }

    /// Resting world position of the cell's cuboid, on the `z = 0` plane.
    #[must_use]
    pub fn rest_position(&self, cell_size: f64) -> DVec3 {
        let offset = self.offset();
        DVec3::new(offset.x * cell_size, offset.y * cell_size, 0.0)
    }

    /// The cell's square on a y-up canvas whose origin is the grid's bottom-left corner.
    #[must_use]
    pub fn canvas_rect(&self, cell_size: f64) -> Rect {
        let x = self.col as f64 * cell_size;
        let y = (GRID_SIZE - 1 - self.row) as f64 * cell_size;
        Rect::new(x, y, x + cell_size, y + cell_size)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use kurbo::{Rect, Vec2};

    use super::{CANVAS_CELL_SIZE, CANVAS_SIZE, GRID_SIZE, LogoGrid, SQUARES_LOGO};
    use crate::palette::ColorIndex;

    #[test]
    fn logo_cell_counts_per_color() {
        assert_eq!(SQUARES_LOGO.len(), 113);
        assert_eq!(SQUARES_LOGO.cells_of(ColorIndex::White).count(), 20);
        assert_eq!(SQUARES_LOGO.cells_of(ColorIndex::Black).count(), 40);
        assert_eq!(SQUARES_LOGO.cells_of(ColorIndex::Red).count(), 53);
        assert!(!SQUARES_LOGO.is_empty());
    }

    #[test]
    fn get_handles_empty_and_out_of_range() {
        assert_eq!(SQUARES_LOGO.get(0, 0), None);
        assert_eq!(SQUARES_LOGO.get(2, 3), Some(ColorIndex::Red));
        assert_eq!(SQUARES_LOGO.get(3, 7), Some(ColorIndex::White));
        assert_eq!(SQUARES_LOGO.get(GRID_SIZE, 0), None);
        assert_eq!(SQUARES_LOGO.get(0, GRID_SIZE), None);
    }

    #[test]
    fn unknown_values_are_empty() {
        let mut rows = [[0_u8; GRID_SIZE]; GRID_SIZE];
        rows[4][4] = 9;
        rows[5][5] = 2;
        let grid = LogoGrid::new(rows);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(4, 4), None);
    }

    #[test]
    fn offsets_are_centered_with_inverted_rows() {
        assert_eq!(LogoGrid::center_offset(), 7.5);
        let top_left = SQUARES_LOGO.cells().next().unwrap();
        assert_eq!((top_left.row, top_left.col), (2, 3));
        assert_eq!(top_left.offset(), Vec2::new(-4.5, 5.5));
        assert_eq!(top_left.rest_position(2.0), DVec3::new(-9.0, 11.0, 0.0));
    }

    #[test]
    fn canvas_rects_match_the_authored_squares() {
        // First white and first red square of the authored 1024×1024 artwork.
        let white = SQUARES_LOGO.cells_of(ColorIndex::White).collect::<Vec<_>>();
        assert!(
            white
                .iter()
                .any(|c| c.canvas_rect(CANVAS_CELL_SIZE) == Rect::new(512.0, 192.0, 576.0, 256.0)),
            "white square at (512, 192) should exist"
        );
        let red = SQUARES_LOGO.cells_of(ColorIndex::Red).collect::<Vec<_>>();
        assert!(
            red.iter()
                .any(|c| c.canvas_rect(CANVAS_CELL_SIZE) == Rect::new(192.0, 832.0, 256.0, 896.0)),
            "red square at (192, 832) should exist"
        );
        for cell in SQUARES_LOGO.cells() {
            let rect = cell.canvas_rect(CANVAS_CELL_SIZE);
            assert!(rect.x0 >= 0.0 && rect.x1 <= CANVAS_SIZE);
            assert!(rect.y0 >= 0.0 && rect.y1 <= CANVAS_SIZE);
        }
    }
}
