// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `squares_logo` crate.
//!
//! These exercise the models end to end: a seeded bounce run on a
//! realistic canvas, the breathing grid built from the real logo, and the
//! fit transform applied to the logical canvas.

use kurbo::{Point, Rect, Size};
use squares_logo::{
    BounceState, CANVAS_CELL_SIZE, CANVAS_SIZE, ColorIndex, DEFAULT_BPM_RANGE, DEFAULT_LOGO_SIZE,
    DEFAULT_SPEED, FitPolicy, SQUARES_LOGO, Tempo, build_grid_animation, fit_rect, fit_transform,
    random,
};

#[test]
fn seeded_bounce_stays_near_the_canvas() {
    let canvas = Size::new(1920.0, 1080.0);
    let half = DEFAULT_LOGO_SIZE / 2.0;
    let mut rng = random::seeded(1);
    let mut state =
        BounceState::with_random_velocity(&mut rng, Point::new(960.0, 540.0), half, DEFAULT_SPEED);
    let speed = state.velocity.hypot();

    let mut hits = 0;
    for _ in 0..20_000 {
        if state.step(canvas).any() {
            hits += 1;
        }
        // Corrected reactively: never more than one tick past a wall.
        assert!(state.center.x - half >= -DEFAULT_SPEED);
        assert!(state.center.x + half <= canvas.width + DEFAULT_SPEED);
        assert!(state.center.y - half >= -DEFAULT_SPEED);
        assert!(state.center.y + half <= canvas.height + DEFAULT_SPEED);
    }
    assert!(hits > 10, "expected several reflections, got {hits}");
    assert_eq!(state.velocity.hypot(), speed);
}

#[test]
fn breathing_grid_from_a_drawn_tempo() {
    let mut rng = random::seeded(0xdead_beef);
    let tempo = Tempo::draw(&mut rng, DEFAULT_BPM_RANGE);
    let cells = build_grid_animation(&SQUARES_LOGO, 0.5, tempo);

    assert_eq!(cells.len(), SQUARES_LOGO.len());
    let reds = cells.iter().filter(|c| c.color == ColorIndex::Red).count();
    assert_eq!(reds, 53);

    // Every cell rests on the z = 0 plane and lifts upwards, never down.
    for cell in &cells {
        assert_eq!(cell.position.z, 0.0);
        assert!(cell.translation.z >= 0.0);
        assert!(cell.translation.is_finite() && cell.rotation.is_finite());
    }

    // Synchronized pulse: every cell is at rest at the same instants.
    let rest_time = tempo.beat_duration() * 0.9;
    for cell in &cells {
        assert_eq!(cell.pose_at(rest_time).position, cell.position);
    }
}

#[test]
fn logo_squares_fit_into_a_widescreen_frame() {
    let logical = Rect::new(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);
    let frame = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let fitted = fit_rect(logical, frame, FitPolicy::AspectFit);
    assert_eq!(fitted.size(), Size::new(1080.0, 1080.0));
    assert_eq!(fitted.x0, 420.0);

    let transform = fit_transform(logical, frame, FitPolicy::AspectFit);
    for cell in SQUARES_LOGO.cells() {
        let square = transform.transform_rect_bbox(cell.canvas_rect(CANVAS_CELL_SIZE));
        assert!(fitted.inflate(1e-9, 1e-9).contains_rect(square));
    }
}
