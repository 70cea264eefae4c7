// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A whole crop screen, headless.
//!
//! Loads a landscape photo into a portrait container, pinches, rotates and
//! drags it off the crop rectangle, lets the wrap animation pull it back, and
//! finally crops.
//!
//! Run:
//! - `cargo run -p passepartout_demos --example crop_session`
//! - `RUST_LOG=passepartout_image=debug cargo run -p passepartout_demos --example crop_session`

use kurbo::{Point, Rect, Size, Vec2};
use passepartout::{CropConfig, CropSession, LoadedImage, SessionConfig, SessionError};
use passepartout_demos::{HeadlessHost, PrintExecutor, init_tracing};

fn main() -> Result<(), SessionError> {
    init_tracing();

    let config = SessionConfig::default()
        .with_crop(CropConfig::default().with_max_result_size(Some((2048, 2048))));
    let mut session = CropSession::new(config)?;
    let mut host = HeadlessHost::default();

    session.set_container(Rect::new(0.0, 0.0, 1080.0, 1920.0))?;
    session.load_image(LoadedImage::new(Size::new(4032.0, 3024.0)))?;
    host.pump(&mut session);
    tracing::info!(crop = ?host.crop_rect, "laid out");

    let focus = host.crop_rect.center();
    session.on_gesture_start();
    session.on_scale(1.4, focus);
    session.on_rotate(-12.0, focus);
    session.on_pan(Vec2::new(-380.0, 140.0));
    session.on_gesture_end(host.now);
    let frames = host.run_frames(&mut session);
    tracing::info!(frames, "wrap settled");

    session.on_double_tap(Point::new(700.0, 900.0), host.now);
    let frames = host.run_frames(&mut session);
    if let Some(image) = session.image() {
        tracing::info!(frames, scale = image.current_scale(), "double tap settled");
    }

    let region = session.crop_with(&mut PrintExecutor)?;
    tracing::info!(
        width = region.width,
        height = region.height,
        redraws = host.redraws,
        "done"
    );
    Ok(())
}
