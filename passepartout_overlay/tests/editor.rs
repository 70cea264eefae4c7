// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crop-rectangle editing through the public API.

use core::time::Duration;

use kurbo::{Point, Rect, Vec2};
use passepartout_overlay::{
    Corner, CropRectEditor, EditorState, FreestyleMode, OverlayConfig, resize,
};

const CROP: Rect = Rect::new(100.0, 100.0, 500.0, 400.0);

#[test]
fn bottom_right_drag_keeps_left_and_top() {
    let resized = resize(
        Corner::BottomRight,
        Point::new(620.0, 350.0),
        CROP,
        100.0,
        true,
    );
    assert_eq!(resized.x0, CROP.x0);
    assert_eq!(resized.y0, CROP.y0);
    assert_eq!(resized, Rect::new(100.0, 100.0, 620.0, 350.0));
}

#[test]
fn too_narrow_commits_height_only() {
    // Width would become 50, height 350.
    let resized = resize(
        Corner::BottomRight,
        Point::new(150.0, 450.0),
        CROP,
        100.0,
        true,
    );
    assert_eq!((resized.x0, resized.x1), (CROP.x0, CROP.x1));
    assert_eq!((resized.y0, resized.y1), (100.0, 450.0));
}

#[test]
fn full_gesture_with_recenter_keeps_image_anchored() {
    let config = OverlayConfig::default()
        .with_freestyle(FreestyleMode::Enabled)
        .with_recenter_duration(Duration::from_millis(300));
    let mut editor = CropRectEditor::new(config);
    let container = Rect::new(0.0, 0.0, 1080.0, 1920.0);
    editor.layout(container, 1.0).expect("valid layout");
    assert_eq!(editor.crop_rect(), Rect::new(0.0, 420.0, 1080.0, 1500.0));

    assert!(editor.on_drag_start(Point::new(5.0, 425.0)));
    assert_eq!(editor.state(), EditorState::DraggingCorner(Corner::TopLeft));
    assert!(editor.on_drag_move(Point::new(200.0, 620.0)));
    let committed = editor.on_drag_end(Duration::from_secs(10)).expect("drag was active");
    assert_eq!(committed, Rect::new(200.0, 620.0, 1080.0, 1500.0));

    let mut now = Duration::from_secs(10);
    let mut image_motion = Vec2::ZERO;
    while let Some(frame) = editor.step_recenter(now) {
        image_motion += frame.image_delta;
        now += Duration::from_millis(16);
    }
    let final_rect = editor.crop_rect();
    assert_eq!(final_rect.center(), container.center());
    assert!((image_motion - (final_rect.origin() - committed.origin())).hypot() < 1e-9);
}
