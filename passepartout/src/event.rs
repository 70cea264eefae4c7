// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size};

/// Something the host should react to.
///
/// A [`CropSession`](crate::CropSession) queues these instead of calling back
/// into host objects; drain them with
/// [`CropSession::drain_events`](crate::CropSession::drain_events).
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The image transform changed; redraw with this matrix.
    TransformChanged(Affine),
    /// The image scale changed.
    ScaleChanged(f64),
    /// The image angle changed, in degrees.
    AngleChanged(f64),
    /// The crop rectangle moved or resized.
    CropRectChanged(Rect),
    /// The crop rectangle's target aspect ratio changed.
    AspectRatioChanged(f64),
    /// An image finished loading.
    LoadComplete {
        /// Natural size of the image.
        natural_size: Size,
        /// EXIF orientation tag reported by the source.
        exif_orientation: u16,
    },
    /// The image source failed.
    LoadFailed,
    /// An animation is running; call [`CropSession::on_frame`](crate::CropSession::on_frame)
    /// on the next frame.
    FrameRequested,
    /// All running animations were cancelled.
    FramesCancelled,
}
