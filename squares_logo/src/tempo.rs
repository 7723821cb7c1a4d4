// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use tinyrand::{Rand, RandRange};

/// Tempo used when a non-positive or non-finite value is supplied.
pub const DEFAULT_BPM: f64 = 80.0;

/// Range the breathing grid draws its tempo from.
pub const DEFAULT_BPM_RANGE: RangeInclusive<u32> = 60..=100;

/// A beats-per-minute value fixing the period of the breathing grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tempo {
    bpm: f64,
}

impl Tempo {
    /// Creates a tempo, normalizing unusable input to [`DEFAULT_BPM`].
    #[must_use]
    pub fn from_bpm(bpm: f64) -> Self {
        if bpm.is_finite() && bpm > 0.0 {
            Self { bpm }
        } else {
            Self { bpm: DEFAULT_BPM }
        }
    }

    /// Draws a whole-number tempo uniformly from `range`.
    ///
    /// A reversed range is normalized; a single-value range returns that value.
    pub fn draw(rng: &mut impl Rand, range: RangeInclusive<u32>) -> Self {
        let (lo, hi) = range.into_inner();
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let bpm = match hi.checked_add(1) {
            Some(end) if lo < hi => rng.next_range(lo..end),
            _ => lo,
        };
        Self::from_bpm(f64::from(bpm))
    }

    /// Beats per minute.
    #[must_use]
    pub fn bpm(self) -> f64 {
        self.bpm
    }

    /// Length of one beat in seconds, `60 / bpm`.
    #[must_use]
    pub fn beat_duration(self) -> f64 {
        60.0 / self.bpm
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::from_bpm(DEFAULT_BPM)
    }
}
