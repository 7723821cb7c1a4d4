// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use squares_logo::{
    BounceState, FitPolicy, SQUARES_LOGO, Tempo, advance_bounce, build_grid_animation, fit_rect,
};
use squares_logo_saver::{BounceSaver, RecordingCanvas, SaverConfig};

fn bench_bounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounce/advance");
    let canvas = Size::new(1920.0, 1080.0);

    // One host session is a few thousand ticks; the long run covers many reflections.
    for ticks in [30_u64, 1_800, 108_000] {
        group.throughput(Throughput::Elements(ticks));
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &ticks, |b, &ticks| {
            b.iter(|| {
                let mut state =
                    BounceState::new(Point::new(960.0, 540.0), Vec2::new(1.2, -1.6), 256.0);
                for _ in 0..ticks {
                    state = advance_bounce(state, canvas);
                }
                black_box(state)
            });
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("breathe");
    group.throughput(Throughput::Elements(SQUARES_LOGO.len() as u64));
    group.bench_function("build", |b| {
        b.iter(|| black_box(build_grid_animation(&SQUARES_LOGO, 1.0, Tempo::from_bpm(72.0))));
    });

    let cells = build_grid_animation(&SQUARES_LOGO, 1.0, Tempo::from_bpm(72.0));
    group.bench_function("sample", |b| {
        let mut t = 0.0;
        b.iter(|| {
            t += 1.0 / 60.0;
            for cell in &cells {
                black_box(cell.pose_at(t));
            }
        });
    });
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let frame = Rect::new(0.0, 0.0, 2560.0, 1440.0);
    let saver = BounceSaver::new(frame, false, SaverConfig::default(), 1).unwrap();
    c.bench_function("saver/draw", |b| {
        let mut canvas = RecordingCanvas::new();
        b.iter(|| {
            saver.draw(&mut canvas);
            black_box(canvas.take_ops());
        });
    });
    c.bench_function("fit/aspect_fit", |b| {
        let logo = Rect::new(0.0, 0.0, 1024.0, 1024.0);
        b.iter(|| black_box(fit_rect(black_box(logo), black_box(frame), FitPolicy::AspectFit)));
    });
}

criterion_group!(benches, bench_bounce, bench_grid, bench_draw);
criterion_main!(benches);
