// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use passepartout_geometry::{ImageMatrix, rotated_rect_contains_rect};
use passepartout_image::{
    CropBoundsFitter, ImageTransformState, ScaleBounds, WrapStep, compute_correction,
};

const CROP: Rect = Rect::new(0.0, 555.0, 1080.0, 1365.0);
const NATURAL: Size = Size::new(4032.0, 3024.0);

/// An image placed over `CROP`, then scaled, rotated and dragged off it.
fn displaced_image(angle: f64) -> (ImageTransformState, ScaleBounds) {
    let mut image = ImageTransformState::new(NATURAL).expect("valid size");
    image.place_to_cover(CROP).expect("valid crop");
    let bounds = ScaleBounds::compute(NATURAL, CROP, 10.0).expect("valid bounds");
    let focus = CROP.center();
    image
        .scale_about(1.3, focus, &bounds)
        .expect("within bounds");
    image.rotate_about(angle, focus);
    image.translate(Vec2::new(-400.0, 120.0));
    (image, bounds)
}

fn bench_predicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage_predicate");
    for angle in [0.0, 15.0, 45.0] {
        let mut matrix = ImageMatrix::from_scale_translate(0.3, Vec2::new(-65.0, 505.0));
        matrix.post_rotate(angle, Point::new(540.0, 960.0));
        let corners = matrix.map_rect(NATURAL.to_rect());
        group.bench_function(format!("rotated_rect_contains_rect/{angle}"), |b| {
            b.iter(|| {
                rotated_rect_contains_rect(black_box(&corners), black_box(CROP), black_box(angle))
            });
        });
    }
    group.finish();
}

fn bench_correction(c: &mut Criterion) {
    let (image, _) = displaced_image(-12.0);
    c.bench_function("compute_correction", |b| {
        b.iter(|| {
            compute_correction(
                black_box(&image.current_corners()),
                image.current_center(),
                CROP,
                image.current_scale(),
                image.current_angle(),
            )
        });
    });
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    group.bench_function("wrap_now", |b| {
        b.iter_batched(
            || displaced_image(-12.0),
            |(mut image, bounds)| {
                let mut fitter = CropBoundsFitter::new(Duration::from_millis(500));
                fitter.wrap_now(&mut image, CROP, &bounds)
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("animated_60fps", |b| {
        b.iter_batched(
            || displaced_image(-12.0),
            |(mut image, bounds)| {
                let mut fitter = CropBoundsFitter::new(Duration::from_millis(500));
                let mut now = Duration::ZERO;
                fitter.begin(&image, CROP, now);
                while fitter.step(&mut image, CROP, &bounds, now) == WrapStep::Running {
                    now += Duration::from_millis(16);
                }
                image.revision()
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_predicate, bench_correction, bench_wrap);
criterion_main!(benches);
