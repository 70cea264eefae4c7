// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks of the transform engine on concrete layouts.

use core::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use passepartout_image::{
    CropBoundsFitter, CropRequest, ImageTransformState, ScaleBounds, WrapStep,
    compute_correction, needs_correction,
};

fn centered_crop(side: f64) -> Rect {
    Rect::from_center_size(Point::new(540.0, 960.0), Size::new(side, side))
}

#[test]
fn landscape_image_square_crop_bounds() {
    let bounds = ScaleBounds::compute(Size::new(2000.0, 1000.0), centered_crop(800.0), 10.0)
        .expect("valid layout");
    assert!((bounds.min_scale() - 0.8).abs() < 1e-12, "{bounds:?}");
    assert!((bounds.max_scale() - 8.0).abs() < 1e-12, "{bounds:?}");
}

#[test]
fn covering_image_needs_no_correction() {
    let crop = centered_crop(800.0);
    let mut image = ImageTransformState::new(Size::new(2000.0, 1000.0)).expect("valid size");
    image.place_to_cover(crop).expect("valid crop");
    assert!(!needs_correction(&image.current_corners(), crop, 0.0));
}

#[test]
fn right_gap_is_closed_by_moving_right() {
    let crop = Rect::new(100.0, 100.0, 900.0, 900.0);
    let mut image = ImageTransformState::new(Size::new(1000.0, 1000.0)).expect("valid size");
    image.place_to_cover(crop).expect("valid crop");
    // Right edge ends 50 px left of the crop's right edge.
    image.translate(Vec2::new(-50.0, 0.0));
    assert!(needs_correction(&image.current_corners(), crop, 0.0));

    let correction = compute_correction(
        &image.current_corners(),
        image.current_center(),
        crop,
        image.current_scale(),
        image.current_angle(),
    );
    assert!(correction.translate_only_suffices);
    assert!((correction.delta.x - 50.0).abs() < 1e-9, "{correction:?}");
    assert!(correction.delta.y.abs() < 1e-9, "{correction:?}");
    assert_eq!(correction.delta_scale, 0.0);
}

#[test]
fn pinch_out_rotate_release_recovers_and_crops() {
    let crop = centered_crop(900.0);
    let mut image = ImageTransformState::new(Size::new(3000.0, 2000.0)).expect("valid size");
    image.place_to_cover(crop).expect("valid crop");
    let bounds = ScaleBounds::compute(image.natural_size(), crop, 10.0).expect("valid layout");

    // A compound gesture: pan, zoom in off-center, rotate.
    image.translate(Vec2::new(40.0, -15.0));
    assert_eq!(
        image.scale_about(1.5, Point::new(600.0, 900.0), &bounds),
        Ok(true)
    );
    image.translate(Vec2::new(520.0, 0.0));
    image.rotate_about(-22.0, Point::new(600.0, 900.0));
    assert!(needs_correction(
        &image.current_corners(),
        crop,
        image.current_angle()
    ));

    let mut fitter = CropBoundsFitter::new(Duration::from_millis(500));
    fitter
        .begin(&image, crop, Duration::from_secs(3))
        .expect("correction needed");
    let mut now = Duration::from_secs(3);
    let mut outcome = WrapStep::Running;
    for _ in 0..400 {
        outcome = fitter.step(&mut image, crop, &bounds, now);
        if outcome != WrapStep::Running {
            break;
        }
        now += Duration::from_millis(16);
    }
    assert_eq!(outcome, WrapStep::Finished);
    assert!((image.current_angle() + 22.0).abs() < 1e-9);

    let request = CropRequest::new(&image, crop, None).expect("laid out");
    let region = request.region().expect("valid request");
    assert!(region.width > 0 && region.height > 0);
    assert!(request.should_crop(&region), "rotated crops always crop");
}
