// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use tinyrand::Rand;

use crate::random;

/// Default speed of the bouncing logo, in canvas units per tick.
pub const DEFAULT_SPEED: f64 = 2.0;

/// Default side of the bouncing logo's bounding square.
pub const DEFAULT_LOGO_SIZE: f64 = 512.0;

/// Per-frame state of the 2D bounce model.
///
/// `center` moves by `velocity` once per tick. Reflection only flips the
/// sign of a velocity component, so `|velocity|` never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceState {
    /// Center of the logo's bounding square, in canvas coordinates.
    pub center: Point,
    /// Displacement applied per tick.
    pub velocity: Vec2,
    /// Half the side of the logo's bounding square.
    pub half_extent: f64,
}

/// Which axes hit a wall on a given tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    /// The left or right edge was reached.
    pub x: bool,
    /// The bottom or top edge was reached.
    pub y: bool,
}

impl Reflection {
    /// Returns `true` if either axis reflected.
    #[must_use]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl BounceState {
    /// Creates a state from its parts.
    #[must_use]
    pub fn new(center: Point, velocity: Vec2, half_extent: f64) -> Self {
        Self {
            center,
            velocity,
            half_extent,
        }
    }

    /// Creates a state with a freshly drawn velocity of magnitude `speed`.
    pub fn with_random_velocity(
        rng: &mut impl Rand,
        center: Point,
        half_extent: f64,
        speed: f64,
    ) -> Self {
        Self::new(center, initial_velocity(rng, speed), half_extent)
    }

    /// Advances one tick in place and reports which axes reflected.
    pub fn step(&mut self, canvas: Size) -> Reflection {
        let reflection = out_of_bounds(self, canvas);
        if reflection.x {
            self.velocity.x = -self.velocity.x;
        }
        if reflection.y {
            self.velocity.y = -self.velocity.y;
        }
        self.center += self.velocity;
        reflection
    }
}

/// Tests each axis of the logo's bounding square against the canvas edges.
///
/// Both comparisons are inclusive, so touching a wall counts as hitting it.
#[must_use]
pub fn out_of_bounds(state: &BounceState, canvas: Size) -> Reflection {
    let BounceState {
        center,
        half_extent,
        ..
    } = *state;
    Reflection {
        x: center.x - half_extent <= 0.0 || center.x + half_extent >= canvas.width,
        y: center.y - half_extent <= 0.0 || center.y + half_extent >= canvas.height,
    }
}

/// Advances `state` by one tick on a canvas of the given size.
///
/// Each axis reflects independently: a corner hit flips both components in
/// the same tick. The center is never clamped, so a velocity that is large
/// relative to the canvas may overshoot a wall for a tick before coming back.
#[must_use]
pub fn advance_bounce(state: BounceState, canvas: Size) -> BounceState {
    let mut next = state;
    next.step(canvas);
    next
}

/// Draws a velocity of magnitude `speed` pointing in a random diagonal-ish direction.
///
/// The x component's magnitude is uniform in `[speed / 4, 3 * speed / 4]`, the
/// y component makes up the rest of the magnitude, and each axis gets an
/// independent random sign.
pub fn initial_velocity(rng: &mut impl Rand, speed: f64) -> Vec2 {
    let speed = speed.abs();
    let x = random::uniform(rng, speed * 0.25, speed * 0.75);
    let y = (speed * speed - x * x).max(0.0).sqrt();
    let x_sign = random::sign(rng);
    let y_sign = random::sign(rng);
    Vec2::new(x * x_sign, y * y_sign)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{BounceState, DEFAULT_SPEED, advance_bounce, initial_velocity, out_of_bounds};
    use crate::random::seeded;

    const CANVAS: Size = Size::new(100.0, 100.0);

    #[test]
    fn x_flips_on_the_tick_the_left_wall_is_reached() {
        let mut state = BounceState::new(Point::new(10.0, 50.0), Vec2::new(-3.0, -3.0), 5.0);

        state = advance_bounce(state, CANVAS);
        assert_eq!(state.center, Point::new(7.0, 47.0));
        assert_eq!(state.velocity, Vec2::new(-3.0, -3.0));

        state = advance_bounce(state, CANVAS);
        assert_eq!(state.center, Point::new(4.0, 44.0));

        // 4 - 5 <= 0: x reflects, y keeps going.
        state = advance_bounce(state, CANVAS);
        assert_eq!(state.velocity, Vec2::new(3.0, -3.0));
        assert_eq!(state.center, Point::new(7.0, 41.0));
    }

    #[test]
    fn both_axes_reflect_in_the_same_tick_at_a_corner() {
        let mut state = BounceState::new(Point::new(10.0, 10.0), Vec2::new(-3.0, -3.0), 5.0);
        state = advance_bounce(state, CANVAS);
        state = advance_bounce(state, CANVAS);
        assert_eq!(state.center, Point::new(4.0, 4.0));
        let reflection = out_of_bounds(&state, CANVAS);
        assert!(reflection.x && reflection.y);
        state = advance_bounce(state, CANVAS);
        assert_eq!(state.velocity, Vec2::new(3.0, 3.0));
        assert_eq!(state.center, Point::new(7.0, 7.0));
    }

    #[test]
    fn touching_the_far_wall_counts() {
        let state = BounceState::new(Point::new(95.0, 50.0), Vec2::new(1.0, 0.0), 5.0);
        let reflection = out_of_bounds(&state, CANVAS);
        assert!(reflection.x);
        assert!(!reflection.y);
        let next = advance_bounce(state, CANVAS);
        assert_eq!(next.velocity, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn speed_is_preserved_over_many_ticks() {
        let start = BounceState::new(Point::new(50.0, 50.0), Vec2::new(1.3, -2.7), 10.0);
        let mut state = start;
        let mut reflections = 0;
        for _ in 0..10_000 {
            if state.step(CANVAS).any() {
                reflections += 1;
            }
            assert_eq!(state.velocity.x.abs(), start.velocity.x.abs());
            assert_eq!(state.velocity.y.abs(), start.velocity.y.abs());
        }
        assert!(reflections > 0, "the logo should have hit a wall");
        assert_eq!(state.velocity.hypot(), start.velocity.hypot());
    }

    #[test]
    fn large_velocity_overshoots_without_clamping() {
        let state = BounceState::new(Point::new(50.0, 50.0), Vec2::new(60.0, 0.0), 5.0);
        let next = advance_bounce(state, CANVAS);
        assert_eq!(next.center, Point::new(110.0, 50.0));
        let back = advance_bounce(next, CANVAS);
        assert_eq!(back.velocity, Vec2::new(-60.0, 0.0));
        assert_eq!(back.center, Point::new(50.0, 50.0));
    }

    #[test]
    fn initial_velocity_has_the_requested_magnitude() {
        let mut rng = seeded(2024);
        for _ in 0..256 {
            let v = initial_velocity(&mut rng, DEFAULT_SPEED);
            assert!((v.hypot() - DEFAULT_SPEED).abs() < 1e-12);
            assert!((0.5..=1.5).contains(&v.x.abs()), "x component {}", v.x);
        }
    }

    #[test]
    fn initial_velocity_is_reproducible_from_a_seed() {
        let a = initial_velocity(&mut seeded(99), DEFAULT_SPEED);
        let b = initial_velocity(&mut seeded(99), DEFAULT_SPEED);
        assert_eq!(a, b);
    }
}
