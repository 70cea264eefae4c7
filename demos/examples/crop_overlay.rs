// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Freestyle crop rectangle editing.
//!
//! Drags the bottom-right handle inward, then watches the rectangle glide
//! back to the container center while the image follows it.
//!
//! Run:
//! - `cargo run -p passepartout_demos --example crop_overlay`

use kurbo::{Point, Rect, Size};
use passepartout::{
    AspectRatio, CropSession, FreestyleMode, LoadedImage, OverlayConfig, SessionConfig,
    SessionError,
};
use passepartout_demos::{HeadlessHost, init_tracing};

fn main() -> Result<(), SessionError> {
    init_tracing();

    let config = SessionConfig::default()
        .with_aspect_ratio(AspectRatio::Fixed(1.0))
        .with_overlay(OverlayConfig::default().with_freestyle(FreestyleMode::Enabled));
    let mut session = CropSession::new(config)?;
    let mut host = HeadlessHost::default();
    session.set_container(Rect::new(0.0, 0.0, 1000.0, 1000.0))?;
    session.load_image(LoadedImage::new(Size::new(3000.0, 2000.0)))?;
    host.pump(&mut session);

    let corner = Point::new(host.crop_rect.x1, host.crop_rect.y1);
    if !session.on_crop_drag_start(corner) {
        tracing::warn!(?corner, "no handle under the pointer");
        return Ok(());
    }
    for step in 1..=10 {
        let t = f64::from(step) / 10.0;
        session.on_crop_drag_move(corner.lerp(Point::new(550.0, 640.0), t));
        host.pump(&mut session);
    }
    if let Some(rect) = session.on_crop_drag_end(host.now) {
        tracing::info!(?rect, "committed");
    }

    let frames = host.run_frames(&mut session);
    tracing::info!(frames, crop = ?host.crop_rect, "recentered");
    if let Some(image) = session.image() {
        tracing::info!(image = ?image.current_image_rect(), "image followed");
    }
    Ok(())
}
