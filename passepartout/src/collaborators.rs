// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces to the parts of a crop screen this crate does not implement.
//!
//! Decoding, rendering, frame scheduling and the final pixel crop all belong
//! to the host. A session only produces data for them: transforms and crop
//! rectangles as [`SessionEvent`]s, and a [`CropRequest`] for the executor.

use kurbo::{Affine, Rect, Size};
use passepartout_image::{CropRegion, CropRequest};

use crate::SessionEvent;

/// A decoded image as reported by an [`ImageSource`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadedImage {
    /// Size of the decoded bitmap in pixels.
    pub natural_size: Size,
    /// EXIF orientation tag (1 when unknown). Already applied to the bitmap.
    pub exif_orientation: u16,
}

impl LoadedImage {
    /// An image of `natural_size` with no orientation information.
    #[must_use]
    pub fn new(natural_size: Size) -> Self {
        Self {
            natural_size,
            exif_orientation: 1,
        }
    }
}

/// Delivers decoded images.
///
/// Decoding happens off the interactive thread; the host calls
/// [`CropSession::load_from`](crate::CropSession::load_from) once the source
/// has a result.
pub trait ImageSource {
    /// Why decoding failed.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Returns the decoded image, or the reason it could not be produced.
    fn take_result(&mut self) -> Result<LoadedImage, Self::Error>;
}

/// Draws the image and the crop overlay.
pub trait RenderSurface {
    /// Redraw the image with `transform` (image space to view space).
    fn apply_transform(&mut self, transform: Affine);

    /// Redraw the crop overlay around `rect`.
    fn set_crop_rect(&mut self, rect: Rect) {
        let _ = rect;
    }
}

/// Runs the host's frame callback.
pub trait FrameScheduler {
    /// Call [`CropSession::on_frame`](crate::CropSession::on_frame) on the
    /// next frame.
    fn request_frame(&mut self);

    /// Drop any pending frame request.
    fn cancel_frames(&mut self);
}

/// Performs the pixel crop.
pub trait CropExecutor {
    /// What a successful crop produces, for example an output location.
    type Output;
    /// Why cropping failed.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Cuts `region` out of the source bitmap described by `request`.
    fn crop(&mut self, request: &CropRequest, region: &CropRegion)
    -> Result<Self::Output, Self::Error>;
}

/// Forwards `events` to `surface` and `scheduler`.
///
/// Load events are not forwarded; hosts that care inspect them before
/// dispatching.
pub fn dispatch_events<R, F>(
    events: impl IntoIterator<Item = SessionEvent>,
    surface: &mut R,
    scheduler: &mut F,
) where
    R: RenderSurface + ?Sized,
    F: FrameScheduler + ?Sized,
{
    for event in events {
        match event {
            SessionEvent::TransformChanged(transform) => surface.apply_transform(transform),
            SessionEvent::CropRectChanged(rect) => surface.set_crop_rect(rect),
            SessionEvent::FrameRequested => scheduler.request_frame(),
            SessionEvent::FramesCancelled => scheduler.cancel_frames(),
            SessionEvent::ScaleChanged(_)
            | SessionEvent::AngleChanged(_)
            | SessionEvent::AspectRatioChanged(_)
            | SessionEvent::LoadComplete { .. }
            | SessionEvent::LoadFailed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Rect};

    use super::{FrameScheduler, RenderSurface, dispatch_events};
    use crate::SessionEvent;

    #[derive(Default)]
    struct Recorder {
        transforms: Vec<Affine>,
        rects: Vec<Rect>,
        frames: usize,
        cancels: usize,
    }

    impl RenderSurface for Recorder {
        fn apply_transform(&mut self, transform: Affine) {
            self.transforms.push(transform);
        }

        fn set_crop_rect(&mut self, rect: Rect) {
            self.rects.push(rect);
        }
    }

    impl FrameScheduler for Recorder {
        fn request_frame(&mut self) {
            self.frames += 1;
        }

        fn cancel_frames(&mut self) {
            self.cancels += 1;
        }
    }

    #[test]
    fn events_reach_their_collaborator() {
        let mut surface = Recorder::default();
        let mut scheduler = Recorder::default();
        dispatch_events(
            [
                SessionEvent::TransformChanged(Affine::scale(2.0)),
                SessionEvent::ScaleChanged(2.0),
                SessionEvent::CropRectChanged(Rect::new(0.0, 0.0, 5.0, 5.0)),
                SessionEvent::FrameRequested,
                SessionEvent::FramesCancelled,
            ],
            &mut surface,
            &mut scheduler,
        );
        assert_eq!(surface.transforms, [Affine::scale(2.0)]);
        assert_eq!(surface.rects, [Rect::new(0.0, 0.0, 5.0, 5.0)]);
        assert_eq!((scheduler.frames, scheduler.cancels), (1, 1));
        assert_eq!(surface.frames, 0);
    }
}
