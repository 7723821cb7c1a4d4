// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three logo colors and the background behind them.

use peniko::Color;

/// Alpha used for the "ghost" rendition of a palette color.
pub const GHOST_ALPHA: f32 = 0.01;

/// Color slot of a non-empty grid cell.
///
/// The discriminants match the values stored in [`crate::LogoGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ColorIndex {
    /// Opaque white.
    White = 1,
    /// Opaque black.
    Black = 2,
    /// The accent red.
    Red = 3,
}

impl ColorIndex {
    /// All slots in paint order.
    pub const ALL: [Self; 3] = [Self::White, Self::Black, Self::Red];

    /// Maps a grid value to a color slot; `0` and unknown values are empty.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::White),
            2 => Some(Self::Black),
            3 => Some(Self::Red),
            _ => None,
        }
    }

    /// The value stored in the grid table for this slot.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// The fixed logo palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Color of [`ColorIndex::White`] cells.
    pub white: Color,
    /// Color of [`ColorIndex::Black`] cells.
    pub black: Color,
    /// Color of [`ColorIndex::Red`] cells.
    pub red: Color,
}

impl Palette {
    /// The logo's own colors: white, black, and red `#D20000`.
    #[must_use]
    pub fn logo() -> Self {
        Self {
            white: Color::from_rgb8(255, 255, 255),
            black: Color::from_rgb8(0, 0, 0),
            red: Color::from_rgb8(210, 0, 0),
        }
    }

    /// Returns the color for a slot.
    #[must_use]
    pub fn color(&self, index: ColorIndex) -> Color {
        match index {
            ColorIndex::White => self.white,
            ColorIndex::Black => self.black,
            ColorIndex::Red => self.red,
        }
    }

    /// Returns the nearly transparent variant of a slot's color.
    #[must_use]
    pub fn ghost(&self, index: ColorIndex) -> Color {
        self.color(index).multiply_alpha(GHOST_ALPHA)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::logo()
    }
}

/// Dark gray fill drawn behind the bouncing logo.
#[must_use]
pub fn background() -> Color {
    Color::from_rgb8(85, 85, 85)
}
