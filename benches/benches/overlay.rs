// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use passepartout_overlay::{
    Corner, CropRectEditor, FreestyleMode, OverlayConfig, hit_test, resize, resize_locked,
};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 1080.0, 1920.0);
const CROP: Rect = Rect::new(40.0, 400.0, 1040.0, 1400.0);

fn bench_hit_test(c: &mut Criterion) {
    let touches = [
        Point::new(45.0, 405.0),
        Point::new(1030.0, 1390.0),
        Point::new(540.0, 900.0),
        Point::new(5.0, 5.0),
    ];
    c.bench_function("hit_test", |b| {
        b.iter(|| {
            touches
                .iter()
                .filter_map(|p| hit_test(black_box(*p), CROP, 30.0, true))
                .count()
        });
    });
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    group.bench_function("free", |b| {
        b.iter(|| {
            Corner::ALL.map(|corner| {
                resize(corner, black_box(Point::new(600.0, 800.0)), CROP, 100.0, true)
            })
        });
    });
    group.bench_function("locked", |b| {
        b.iter(|| {
            Corner::ALL.map(|corner| {
                resize_locked(
                    corner,
                    black_box(Point::new(600.0, 800.0)),
                    CROP,
                    1.0,
                    100.0,
                    CONTAINER,
                )
            })
        });
    });
    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    let config = OverlayConfig::default().with_freestyle(FreestyleMode::Enabled);
    c.bench_function("drag_and_recenter", |b| {
        b.iter(|| {
            let mut editor = CropRectEditor::new(config);
            editor.layout(CONTAINER, 1.0);
            let start = Point::new(editor.crop_rect().x1, editor.crop_rect().y1);
            editor.on_drag_start(start);
            for i in 1..=30 {
                let t = f64::from(i) / 30.0;
                editor.on_drag_move(start.lerp(Point::new(700.0, 1100.0), t));
            }
            editor.on_drag_end(Duration::ZERO);
            let mut now = Duration::ZERO;
            while let Some(frame) = editor.step_recenter(now) {
                if frame.finished {
                    break;
                }
                now += Duration::from_millis(16);
            }
            editor.crop_rect()
        });
    });
}

criterion_group!(benches, bench_hit_test, bench_resize, bench_drag_gesture);
criterion_main!(benches);
