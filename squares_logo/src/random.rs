// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seeded one-time draws.
//!
//! Velocity and tempo are drawn once when an animation is built and never
//! again. Drivers own the generator and pass it in, so a fixed seed replays
//! the same animation.

use tinyrand::{Probability, Rand, Seeded, StdRand};

/// Creates the generator used for construction-time draws.
#[must_use]
pub fn seeded(seed: u64) -> StdRand {
    StdRand::seed(seed)
}

/// Uniform sample in `[0, 1)` built from the top 53 bits of one draw.
pub fn unit_f64(rng: &mut impl Rand) -> f64 {
    const SCALE: f64 = 1.0 / (1_u64 << 53) as f64;
    (rng.next_u64() >> 11) as f64 * SCALE
}

/// Uniform sample in `[lo, hi]`; a reversed range is normalized.
pub fn uniform(rng: &mut impl Rand, lo: f64, hi: f64) -> f64 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    lo + unit_f64(rng) * (hi - lo)
}

/// `1.0` or `-1.0` with equal probability.
pub fn sign(rng: &mut impl Rand) -> f64 {
    if rng.next_bool(Probability::new(0.5)) { 1.0 } else { -1.0 }
}
