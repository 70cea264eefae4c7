// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the demos: a logging setup and a headless host.
//!
//! The host stands in for a real UI toolkit. It "renders" by logging, keeps a
//! manual clock for frames, and "crops" by reporting the pixel region.

use core::fmt;
use core::time::Duration;

use kurbo::{Affine, Rect};
use passepartout::{
    CropExecutor, CropRegion, CropRequest, CropSession, FrameScheduler, RenderSurface,
    dispatch_events,
};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A headless stand-in for a crop screen.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    /// Current time of the manual clock.
    pub now: Duration,
    /// Last transform drawn.
    pub transform: Affine,
    /// Last crop rectangle drawn.
    pub crop_rect: Rect,
    /// Number of redraws.
    pub redraws: usize,
    frame_pending: bool,
}

impl HeadlessHost {
    /// Frame interval of the manual clock.
    pub const FRAME: Duration = Duration::from_millis(16);

    /// Forwards the session's queued events to this host.
    pub fn pump(&mut self, session: &mut CropSession) {
        let events = session.drain_events();
        let mut surface = Surface {
            transform: &mut self.transform,
            crop_rect: &mut self.crop_rect,
            redraws: &mut self.redraws,
        };
        let mut scheduler = Scheduler(&mut self.frame_pending);
        dispatch_events(events, &mut surface, &mut scheduler);
    }

    /// Runs frames until the session stops asking for them. Returns how many
    /// frames ran.
    pub fn run_frames(&mut self, session: &mut CropSession) -> usize {
        self.pump(session);
        let mut frames = 0;
        while self.frame_pending {
            self.frame_pending = false;
            self.now += Self::FRAME;
            session.on_frame(self.now);
            self.pump(session);
            frames += 1;
        }
        frames
    }
}

struct Surface<'a> {
    transform: &'a mut Affine,
    crop_rect: &'a mut Rect,
    redraws: &'a mut usize,
}

impl RenderSurface for Surface<'_> {
    fn apply_transform(&mut self, transform: Affine) {
        *self.transform = transform;
        *self.redraws += 1;
    }

    fn set_crop_rect(&mut self, rect: Rect) {
        *self.crop_rect = rect;
        *self.redraws += 1;
    }
}

struct Scheduler<'a>(&'a mut bool);

impl FrameScheduler for Scheduler<'_> {
    fn request_frame(&mut self) {
        *self.0 = true;
    }

    fn cancel_frames(&mut self) {
        *self.0 = false;
    }
}

/// Why the print executor refused.
#[derive(Debug)]
pub struct EmptyRegion;

impl fmt::Display for EmptyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("crop region is empty")
    }
}

impl core::error::Error for EmptyRegion {}

/// Executor that reports the region instead of touching pixels.
#[derive(Debug, Default)]
pub struct PrintExecutor;

impl CropExecutor for PrintExecutor {
    type Output = CropRegion;
    type Error = EmptyRegion;

    fn crop(
        &mut self,
        request: &CropRequest,
        region: &CropRegion,
    ) -> Result<CropRegion, EmptyRegion> {
        if region.width == 0 || region.height == 0 {
            return Err(EmptyRegion);
        }
        tracing::info!(
            angle = request.angle,
            scale = request.scale,
            should_crop = request.should_crop(region),
            ?region,
            "cropping"
        );
        Ok(*region)
    }
}
